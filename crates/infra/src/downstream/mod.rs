//! Downstream service boundary.
//!
//! The composite talks to three independently deployed backends. Each backend
//! is a capability trait so callers can depend on exactly what they use and
//! tests can swap in fakes; `DownstreamClient` implements all three over HTTP.

pub mod client;
pub mod config;
pub mod error;
pub mod r#trait;

pub use client::DownstreamClient;
pub use config::{DownstreamConfig, ServiceEndpoint};
pub use error::IntegrationError;
pub use r#trait::{ProductApi, RecommendationApi, ReviewApi};
