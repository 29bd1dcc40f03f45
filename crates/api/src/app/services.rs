use std::sync::Arc;

use storefront_core::ServiceAddressResolver;
use storefront_infra::DownstreamClient;

use crate::aggregator::Aggregator;
use crate::config::CompositeConfig;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppServices {
    pub aggregator: Aggregator,
    pub address: Arc<ServiceAddressResolver>,
}

pub fn build_services(
    config: &CompositeConfig,
    address: Arc<ServiceAddressResolver>,
) -> AppServices {
    tracing::info!(
        product = %config.downstream.product_url(),
        recommendation = %config.downstream.recommendation_url(),
        review = %config.downstream.review_url(),
        "downstream services configured"
    );

    let client = DownstreamClient::new(&config.downstream);
    AppServices {
        aggregator: Aggregator::new(client, address.clone()),
        address,
    }
}
