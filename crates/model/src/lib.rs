//! Storefront wire model.
//!
//! Plain data exchanged between the storefront services: the three core
//! entities served by the downstream backends and the composite view built
//! from them. Everything here is request-scoped and serialized as camelCase
//! JSON.

pub mod composite;
mod de;
pub mod product;
pub mod recommendation;
pub mod review;

pub use composite::{ProductAggregate, RecommendationSummary, ReviewSummary, ServiceAddresses};
pub use product::Product;
pub use recommendation::Recommendation;
pub use review::Review;
