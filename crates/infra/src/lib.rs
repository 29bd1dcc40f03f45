//! Infrastructure layer: clients for the downstream storefront services.

pub mod downstream;

pub use downstream::{
    DownstreamClient, DownstreamConfig, IntegrationError, ProductApi, RecommendationApi,
    ReviewApi, ServiceEndpoint,
};
