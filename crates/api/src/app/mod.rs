//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: downstream client and aggregator wiring
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_core::ServiceAddressResolver;

use crate::config::CompositeConfig;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &CompositeConfig, address: Arc<ServiceAddressResolver>) -> Router {
    let services = Arc::new(services::build_services(config, address));
    router(services)
}

/// Router over already-built services.
pub fn router(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
