use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};

use storefront_core::{ServiceAddressResolver, ServiceError, ServiceResult};
use storefront_model::Recommendation;

use crate::request::{self, ProductQuery};
use crate::errors;

/// Product id that has no recommendations.
pub const PRODUCT_WITHOUT_RECOMMENDATIONS: i32 = 113;

pub fn router(address: Arc<ServiceAddressResolver>) -> Router {
    crate::service_router(
        Router::new().route("/recommendation", get(get_recommendations)),
        address,
    )
}

pub fn find_recommendations(
    product_id: i32,
    service_address: &str,
) -> ServiceResult<Vec<Recommendation>> {
    if product_id < 1 {
        return Err(ServiceError::invalid_input(format!(
            "Invalid productId: {product_id}"
        )));
    }
    if product_id == PRODUCT_WITHOUT_RECOMMENDATIONS {
        tracing::debug!(product_id, "no recommendations found");
        return Ok(Vec::new());
    }

    Ok((1..=3)
        .map(|n| Recommendation {
            product_id,
            recommendation_id: n,
            author: format!("Author {n}"),
            rate: n,
            content: format!("Content {n}"),
            service_address: service_address.to_string(),
        })
        .collect())
}

async fn get_recommendations(
    Extension(address): Extension<Arc<ServiceAddressResolver>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
    uri: Uri,
) -> axum::response::Response {
    let product_id = match request::product_id_from_query(query, uri.path()) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match find_recommendations(product_id, address.service_address()) {
        Ok(list) => {
            tracing::debug!(size = list.len(), "/recommendation response");
            (StatusCode::OK, Json(list)).into_response()
        }
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}
