use serde::{Deserialize, Serialize};

/// Recommendation as served by the recommendation backend.
///
/// `productId`, `content` and `serviceAddress` may be missing or `null` on the
/// wire; the composite view only reads the id, author, rate and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub service_address: String,
}
