use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};

use storefront_core::{ServiceAddressResolver, ServiceError, ServiceResult};
use storefront_model::Product;

use crate::{errors, request};

/// Id the product service never finds.
pub const MISSING_PRODUCT_ID: i32 = 13;

pub fn router(address: Arc<ServiceAddressResolver>) -> Router {
    crate::service_router(
        Router::new().route("/product/:product_id", get(get_product)),
        address,
    )
}

/// Synthetic product for `product_id`.
pub fn find_product(product_id: i32, service_address: &str) -> ServiceResult<Product> {
    if product_id < 1 {
        return Err(ServiceError::invalid_input(format!(
            "Invalid productId: {product_id}"
        )));
    }
    if product_id == MISSING_PRODUCT_ID {
        return Err(ServiceError::not_found(format!(
            "No product found for productId: {product_id}"
        )));
    }
    Ok(Product::new(product_id, format!("name-{product_id}"), 123, service_address))
}

async fn get_product(
    Extension(address): Extension<Arc<ServiceAddressResolver>>,
    Path(product_id): Path<String>,
    uri: Uri,
) -> axum::response::Response {
    let product_id = match request::product_id_from_path(&product_id, uri.path()) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match find_product(product_id, address.service_address()) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}
