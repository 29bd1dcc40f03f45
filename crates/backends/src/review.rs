use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};

use storefront_core::{ServiceAddressResolver, ServiceError, ServiceResult};
use storefront_model::Review;

use crate::request::{self, ProductQuery};
use crate::errors;

/// Product id that has no reviews.
pub const PRODUCT_WITHOUT_REVIEWS: i32 = 213;

pub fn router(address: Arc<ServiceAddressResolver>) -> Router {
    crate::service_router(Router::new().route("/review", get(get_reviews)), address)
}

pub fn find_reviews(product_id: i32, service_address: &str) -> ServiceResult<Vec<Review>> {
    if product_id < 1 {
        return Err(ServiceError::invalid_input(format!(
            "Invalid productId: {product_id}"
        )));
    }
    if product_id == PRODUCT_WITHOUT_REVIEWS {
        tracing::debug!(product_id, "no reviews found");
        return Ok(Vec::new());
    }

    Ok((1..=3)
        .map(|n| Review {
            product_id,
            review_id: n,
            author: format!("Author {n}"),
            subject: format!("Subject {n}"),
            content: format!("Content {n}"),
            service_address: service_address.to_string(),
        })
        .collect())
}

async fn get_reviews(
    Extension(address): Extension<Arc<ServiceAddressResolver>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
    uri: Uri,
) -> axum::response::Response {
    let product_id = match request::product_id_from_query(query, uri.path()) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match find_reviews(product_id, address.service_address()) {
        Ok(list) => {
            tracing::debug!(size = list.len(), "/review response");
            (StatusCode::OK, Json(list)).into_response()
        }
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}
