//! Service error model.

use http::StatusCode;
use thiserror::Error;

/// Result type used by request handlers across the services.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Request-level error raised by a service while answering a call.
///
/// Only the two conditions callers are expected to act on get their own kind.
/// Anything else is an upstream or transport concern and is modelled by the
/// component that talks to the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request carried an argument the service cannot work with.
    #[error("{0}")]
    InvalidInput(String),
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::InvalidInput(msg) => msg,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
