//! Composite service configuration, read once at startup.

use storefront_core::ConfigError;
use storefront_core::config::{process_env, read_port, read_string};
use storefront_infra::{DownstreamConfig, ServiceEndpoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeConfig {
    pub bind_host: String,
    pub port: u16,
    pub downstream: DownstreamConfig,
}

impl CompositeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DownstreamConfig::default();

        Ok(Self {
            bind_host: read_string(lookup, "BIND_HOST", "0.0.0.0"),
            port: read_port(lookup, "SERVER_PORT", 7000)?,
            downstream: DownstreamConfig {
                product: ServiceEndpoint::new(
                    read_string(lookup, "APP_PRODUCT_SERVICE_HOST", &defaults.product.host),
                    read_port(lookup, "APP_PRODUCT_SERVICE_PORT", defaults.product.port)?,
                ),
                recommendation: ServiceEndpoint::new(
                    read_string(
                        lookup,
                        "APP_RECOMMENDATION_SERVICE_HOST",
                        &defaults.recommendation.host,
                    ),
                    read_port(
                        lookup,
                        "APP_RECOMMENDATION_SERVICE_PORT",
                        defaults.recommendation.port,
                    )?,
                ),
                review: ServiceEndpoint::new(
                    read_string(lookup, "APP_REVIEW_SERVICE_HOST", &defaults.review.host),
                    read_port(lookup, "APP_REVIEW_SERVICE_PORT", defaults.review.port)?,
                ),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backends() {
        let config = CompositeConfig::from_lookup(&|_: &str| None).unwrap();

        assert_eq!(config.bind_host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.downstream, DownstreamConfig::default());
    }

    #[test]
    fn overrides_are_applied_per_service() {
        let lookup = |key: &str| match key {
            "SERVER_PORT" => Some("8080".to_string()),
            "APP_PRODUCT_SERVICE_HOST" => Some("product".to_string()),
            "APP_REVIEW_SERVICE_PORT" => Some("9003".to_string()),
            _ => None,
        };

        let config = CompositeConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.downstream.product, ServiceEndpoint::new("product", 7001));
        assert_eq!(config.downstream.recommendation, ServiceEndpoint::new("localhost", 7002));
        assert_eq!(config.downstream.review, ServiceEndpoint::new("localhost", 9003));
    }

    #[test]
    fn invalid_port_is_reported() {
        let lookup = |key: &str| (key == "APP_PRODUCT_SERVICE_PORT").then(|| "x".to_string());

        let err = CompositeConfig::from_lookup(&lookup).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPort { var: "APP_PRODUCT_SERVICE_PORT", .. }
        ));
    }
}
