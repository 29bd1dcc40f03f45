//! Request parameters shared by the backends.

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::errors;

/// `?productId=` query of the list endpoints.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(rename = "productId")]
    pub product_id: i32,
}

/// Numeric product id from a path segment, or a 400 error body.
pub fn product_id_from_path(raw: &str, path: &str) -> Result<i32, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, path, "Type mismatch."))
}

/// Product id from the query string, or a 400 error body.
pub fn product_id_from_query(
    query: Result<Query<ProductQuery>, QueryRejection>,
    path: &str,
) -> Result<i32, axum::response::Response> {
    query
        .map(|Query(q)| q.product_id)
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, path, e.body_text()))
}
