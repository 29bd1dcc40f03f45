use serde::{Deserialize, Deserializer};

/// Read an explicit JSON `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use crate::{Product, Recommendation, Review};

    #[test]
    fn null_service_address_reads_as_empty() {
        let product: Product = serde_json::from_str(
            r#"{"productId":2,"name":"n","weight":1,"serviceAddress":null}"#,
        )
        .unwrap();
        assert_eq!(product.service_address, "");
    }

    #[test]
    fn null_optional_fields_read_as_defaults() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"productId":null,"recommendationId":1,"author":"a","rate":1,
                "content":null,"serviceAddress":null}"#,
        )
        .unwrap();
        assert_eq!((rec.product_id, rec.content.as_str()), (0, ""));
        assert_eq!(rec.service_address, "");

        let rev: Review = serde_json::from_str(
            r#"{"reviewId":1,"author":"a","subject":"s","content":null,"serviceAddress":null}"#,
        )
        .unwrap();
        assert_eq!(rev.content, "");
        assert_eq!(rev.service_address, "");
    }

    #[test]
    fn required_fields_still_reject_null() {
        let res = serde_json::from_str::<Review>(
            r#"{"reviewId":1,"author":null,"subject":"s"}"#,
        );
        assert!(res.is_err());
    }
}
