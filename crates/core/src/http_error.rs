//! JSON error body returned by every service.

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error body: `{timestamp, path, httpStatus, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpErrorInfo {
    pub timestamp: DateTime<Utc>,
    pub path: String,
    pub http_status: String,
    pub message: String,
}

impl HttpErrorInfo {
    pub fn new(status: StatusCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: path.into(),
            http_status: status_name(status),
            message: message.into(),
        }
    }
}

/// Upper-snake name of a status, e.g. `404` -> `NOT_FOUND`.
///
/// Statuses without a canonical reason fall back to their numeric code.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .filter(|c| *c != '\'')
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect(),
        None => status.as_u16().to_string(),
    }
}
