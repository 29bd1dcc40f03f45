use axum::http::StatusCode;
use axum::response::IntoResponse;

use storefront_core::{HttpErrorInfo, ServiceError};

pub fn service_error_to_response(err: ServiceError, path: &str) -> axum::response::Response {
    tracing::debug!(error = %err, %path, "request rejected");
    json_error(err.status(), path, err.message())
}

pub fn json_error(
    status: StatusCode,
    path: &str,
    message: impl Into<String>,
) -> axum::response::Response {
    (status, axum::Json(HttpErrorInfo::new(status, path, message))).into_response()
}
