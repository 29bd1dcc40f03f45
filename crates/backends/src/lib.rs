//! Mock product, recommendation and review services.
//!
//! Deterministic stand-ins for the real backends: they answer from the
//! request alone, stamp their own service address into every entity and
//! report failures with the shared JSON error body.

use std::sync::Arc;

use axum::{Extension, Router, http::StatusCode, routing::get};

use storefront_core::ServiceAddressResolver;

pub mod config;
pub mod errors;
pub mod product;
pub mod recommendation;
pub mod request;
pub mod review;

pub use config::BackendsConfig;

/// Wrap a backend's routes with the health endpoint and its address resolver.
pub(crate) fn service_router(routes: Router, address: Arc<ServiceAddressResolver>) -> Router {
    routes
        .route("/health", get(health))
        .layer(Extension(address))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
