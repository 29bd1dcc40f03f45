use storefront_model::{Product, Recommendation, Review};

use super::error::IntegrationError;

/// Product lookups.
///
/// `Ok(None)` means the backend answered successfully but without a product;
/// a missing product reported by the backend itself is `IntegrationError::NotFound`.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, IntegrationError>;
}

/// Recommendation lookups. An empty list is a valid answer.
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, IntegrationError>;
}

/// Review lookups. An empty list is a valid answer.
#[async_trait::async_trait]
pub trait ReviewApi: Send + Sync {
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, IntegrationError>;
}
