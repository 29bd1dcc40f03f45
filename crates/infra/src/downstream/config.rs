/// Host and port of one downstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Where the three downstream services live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamConfig {
    pub product: ServiceEndpoint,
    pub recommendation: ServiceEndpoint,
    pub review: ServiceEndpoint,
}

impl DownstreamConfig {
    /// Prefix the product id is appended to as a path segment.
    pub fn product_url(&self) -> String {
        format!("{}/product/", self.product.base_url())
    }

    /// Prefix the product id is appended to as the `productId` query value.
    pub fn recommendation_url(&self) -> String {
        format!("{}/recommendation?productId=", self.recommendation.base_url())
    }

    /// Prefix the product id is appended to as the `productId` query value.
    pub fn review_url(&self) -> String {
        format!("{}/review?productId=", self.review.base_url())
    }
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            product: ServiceEndpoint::new("localhost", 7001),
            recommendation: ServiceEndpoint::new("localhost", 7002),
            review: ServiceEndpoint::new("localhost", 7003),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_each_service_layout() {
        let config = DownstreamConfig {
            product: ServiceEndpoint::new("product", 8081),
            recommendation: ServiceEndpoint::new("recommendation", 8082),
            review: ServiceEndpoint::new("review", 8083),
        };

        assert_eq!(config.product_url(), "http://product:8081/product/");
        assert_eq!(
            config.recommendation_url(),
            "http://recommendation:8082/recommendation?productId="
        );
        assert_eq!(config.review_url(), "http://review:8083/review?productId=");
    }
}
