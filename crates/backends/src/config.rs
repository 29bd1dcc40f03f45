//! Ports the mock backends listen on.

use storefront_core::ConfigError;
use storefront_core::config::{process_env, read_port, read_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendsConfig {
    pub bind_host: String,
    pub product_port: u16,
    pub recommendation_port: u16,
    pub review_port: u16,
}

impl BackendsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_host: read_string(lookup, "BIND_HOST", "0.0.0.0"),
            product_port: read_port(lookup, "PRODUCT_SERVICE_PORT", 7001)?,
            recommendation_port: read_port(lookup, "RECOMMENDATION_SERVICE_PORT", 7002)?,
            review_port: read_port(lookup, "REVIEW_SERVICE_PORT", 7003)?,
        })
    }
}
