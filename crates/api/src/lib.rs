//! Product composite service: aggregation, routing and error mapping.

pub mod aggregator;
pub mod app;
pub mod config;

pub use aggregator::Aggregator;
pub use config::CompositeConfig;
