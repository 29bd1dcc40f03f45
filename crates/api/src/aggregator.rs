//! Builds the composite product view from the three downstream services.

use std::sync::Arc;

use tracing::{debug, instrument};

use storefront_core::{ServiceAddressResolver, ServiceError};
use storefront_infra::{
    DownstreamClient, IntegrationError, ProductApi, RecommendationApi, ReviewApi,
};
use storefront_model::ProductAggregate;

/// Orchestrates the downstream lookups for one composite request.
///
/// Stateless across requests; a failure of any lookup aborts the whole
/// aggregate and is returned as-is.
#[derive(Clone)]
pub struct Aggregator {
    products: Arc<dyn ProductApi>,
    recommendations: Arc<dyn RecommendationApi>,
    reviews: Arc<dyn ReviewApi>,
    address: Arc<ServiceAddressResolver>,
}

impl Aggregator {
    /// Aggregator backed by a single HTTP client for all three services.
    pub fn new(client: DownstreamClient, address: Arc<ServiceAddressResolver>) -> Self {
        let client = Arc::new(client);
        Self::from_parts(client.clone(), client.clone(), client, address)
    }

    pub fn from_parts(
        products: Arc<dyn ProductApi>,
        recommendations: Arc<dyn RecommendationApi>,
        reviews: Arc<dyn ReviewApi>,
        address: Arc<ServiceAddressResolver>,
    ) -> Self {
        Self {
            products,
            recommendations,
            reviews,
            address,
        }
    }

    /// Product, then recommendations and reviews (concurrently), merged.
    #[instrument(skip(self))]
    pub async fn get_aggregate(
        &self,
        product_id: i32,
    ) -> Result<ProductAggregate, IntegrationError> {
        let product = self.products.get_product(product_id).await?.ok_or_else(|| {
            ServiceError::not_found(format!("No product found for productId: {product_id}"))
        })?;

        let (recommendations, reviews) = tokio::try_join!(
            self.recommendations.get_recommendations(product_id),
            self.reviews.get_reviews(product_id),
        )?;

        debug!(
            recommendations = recommendations.len(),
            reviews = reviews.len(),
            "merging composite view"
        );

        Ok(ProductAggregate::assemble(
            &product,
            &recommendations,
            &reviews,
            self.address.service_address(),
        ))
    }
}
