use reqwest::StatusCode;
use thiserror::Error;

use storefront_core::ServiceError;

/// Failure of a downstream call.
///
/// `NotFound` and `InvalidInput` are only produced for product lookups that
/// the backend answered with 404/422. Every other non-2xx answer is carried
/// unchanged as `Upstream` so the original status and body reach the caller.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    /// Non-2xx answer that was not translated.
    #[error("{message}")]
    Upstream {
        status: StatusCode,
        /// `Content-Type` the backend sent with `body`, if any.
        content_type: Option<String>,
        body: String,
        message: String,
    },

    /// The request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that is not the expected JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntegrationError {
    /// Untranslated non-2xx answer.
    pub fn upstream(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            content_type: None,
            body: body.into(),
            message: status_line(status),
        }
    }

    /// Attach the backend's `Content-Type` to an `Upstream` error.
    pub fn with_content_type(mut self, value: Option<String>) -> Self {
        if let Self::Upstream { content_type, .. } = &mut self {
            *content_type = value;
        }
        self
    }
}

impl From<ServiceError> for IntegrationError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}

/// `"404 Not Found"`-style description of a status.
pub(crate) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
