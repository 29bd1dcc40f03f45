use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, Uri},
    response::IntoResponse,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn get_product_composite(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
    uri: Uri,
) -> axum::response::Response {
    let path = uri.path();
    let product_id: i32 = match product_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, path, "Type mismatch."),
    };

    match services.aggregator.get_aggregate(product_id).await {
        Ok(aggregate) => (StatusCode::OK, Json(aggregate)).into_response(),
        Err(e) => errors::integration_error_to_response(e, path),
    }
}
