use axum::{Router, routing::get};

pub mod composite;
pub mod system;

/// Router for the composite endpoints.
pub fn router() -> Router {
    Router::new().route(
        "/product-composite/:product_id",
        get(composite::get_product_composite),
    )
}
