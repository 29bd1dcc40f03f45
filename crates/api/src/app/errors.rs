use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;

use storefront_core::HttpErrorInfo;
use storefront_infra::IntegrationError;

/// Map a failed aggregation to the response the caller sees.
///
/// Not-found and invalid-input keep their status; an untranslated upstream
/// answer is replayed with its original status and body.
pub fn integration_error_to_response(
    err: IntegrationError,
    path: &str,
) -> axum::response::Response {
    match err {
        IntegrationError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, path, msg),
        IntegrationError::InvalidInput(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, path, msg)
        }
        IntegrationError::Upstream {
            status,
            content_type,
            body,
            ..
        } => passthrough(status, content_type, body),
        err @ (IntegrationError::Transport(_) | IntegrationError::Decode(_)) => {
            tracing::warn!(error = %err, "downstream call failed");
            json_error(StatusCode::BAD_GATEWAY, path, err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    path: &str,
    message: impl Into<String>,
) -> axum::response::Response {
    (status, axum::Json(HttpErrorInfo::new(status, path, message))).into_response()
}

/// Replay an upstream answer; without a known content type it goes out as text.
fn passthrough(
    status: StatusCode,
    content_type: Option<String>,
    body: String,
) -> axum::response::Response {
    let mut res = (status, body).into_response();
    if let Some(value) = content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
        res.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    res
}
