//! `storefront-core` — building blocks shared by every storefront service.
//!
//! This crate holds the request-level error model, the JSON error body all
//! services answer with, environment configuration helpers, and the resolver
//! each process uses to stamp its own network identity into the data it
//! produces.

pub mod address;
pub mod config;
pub mod error;
pub mod http_error;

pub use address::ServiceAddressResolver;
pub use config::ConfigError;
pub use error::{ServiceError, ServiceResult};
pub use http_error::{HttpErrorInfo, status_name};
