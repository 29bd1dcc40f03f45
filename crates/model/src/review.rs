use serde::{Deserialize, Serialize};

/// Review as served by the review backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub service_address: String,
}
