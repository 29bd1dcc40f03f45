use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storefront_backends::{BackendsConfig, product, recommendation, review};
use storefront_core::ServiceAddressResolver;
use tokio::net::TcpListener;

async fn serve(
    name: &'static str,
    host: &str,
    port: u16,
    router: fn(Arc<ServiceAddressResolver>) -> Router,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {name} service to {host}:{port}"))?;
    let local_addr = listener.local_addr()?;

    let address = Arc::new(ServiceAddressResolver::new(local_addr.port()));
    tracing::info!(
        service = name,
        %local_addr,
        service_address = address.service_address(),
        "backend listening"
    );

    axum::serve(listener, router(address))
        .await
        .with_context(|| format!("{name} service error"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = BackendsConfig::from_env().context("failed to load configuration")?;
    let host = config.bind_host.as_str();

    tokio::try_join!(
        serve("product", host, config.product_port, product::router),
        serve("recommendation", host, config.recommendation_port, recommendation::router),
        serve("review", host, config.review_port, review::router),
    )?;

    Ok(())
}
