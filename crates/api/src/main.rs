use std::sync::Arc;

use anyhow::Context;
use storefront_api::CompositeConfig;
use storefront_core::ServiceAddressResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = CompositeConfig::from_env().context("failed to load configuration")?;

    let listener = tokio::net::TcpListener::bind((config.bind_host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.bind_host, config.port))?;
    let local_addr = listener.local_addr()?;

    let address = Arc::new(ServiceAddressResolver::new(local_addr.port()));
    tracing::info!(
        %local_addr,
        service_address = address.service_address(),
        "product composite service listening"
    );

    let app = storefront_api::app::build_app(&config, address);
    axum::serve(listener, app).await.context("server error")
}
