use serde::{Deserialize, Serialize};

/// Product as served by the product backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub service_address: String,
}

impl Product {
    pub fn new(
        product_id: i32,
        name: impl Into<String>,
        weight: i32,
        service_address: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            weight,
            service_address: service_address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let product: Product = serde_json::from_str(
            r#"{"productId":1,"name":"name-1","weight":123,"serviceAddress":"pro:7001"}"#,
        )
        .unwrap();

        assert_eq!(product, Product::new(1, "name-1", 123, "pro:7001"));
    }

    #[test]
    fn missing_service_address_defaults_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"productId":2,"name":"n","weight":1}"#).unwrap();
        assert_eq!(product.service_address, "");
    }
}
