use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use storefront_model::{Product, Recommendation, Review};

use super::config::DownstreamConfig;
use super::error::{IntegrationError, status_line};
use super::r#trait::{ProductApi, RecommendationApi, ReviewApi};

/// HTTP client for the product, recommendation and review services.
///
/// One GET per call, transport defaults for timeouts, no retries.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
    product_url: String,
    recommendation_url: String,
    review_url: String,
}

/// The part of an error body the client cares about.
#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: Option<String>,
}

impl DownstreamClient {
    pub fn new(config: &DownstreamConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &DownstreamConfig) -> Self {
        Self {
            http,
            product_url: config.product_url(),
            recommendation_url: config.recommendation_url(),
            review_url: config.review_url(),
        }
    }

    /// GET a JSON list; any non-2xx answer is returned untranslated.
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, IntegrationError> {
        debug!(%url, "calling downstream service");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let content_type = content_type(&resp);
            let body = error_body(resp).await;
            warn!(%url, %status, body = %body, "downstream call failed, passing the error on");
            return Err(IntegrationError::upstream(status, body).with_content_type(content_type));
        }

        let bytes = resp.bytes().await?;
        Ok(decode_optional::<Vec<T>>(&bytes)?.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl ProductApi for DownstreamClient {
    #[instrument(skip(self))]
    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, IntegrationError> {
        let url = format!("{}{}", self.product_url, product_id);
        debug!(%url, "calling product service");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(decode_optional(&bytes)?);
        }

        let content_type = content_type(&resp);
        let body = error_body(resp).await;
        Err(map_product_error(status, body).with_content_type(content_type))
    }
}

#[async_trait::async_trait]
impl RecommendationApi for DownstreamClient {
    #[instrument(skip(self))]
    async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, IntegrationError> {
        let url = format!("{}{}", self.recommendation_url, product_id);
        self.get_list(&url).await
    }
}

#[async_trait::async_trait]
impl ReviewApi for DownstreamClient {
    #[instrument(skip(self))]
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, IntegrationError> {
        let url = format!("{}{}", self.review_url, product_id);
        self.get_list(&url).await
    }
}

fn map_product_error(status: StatusCode, body: String) -> IntegrationError {
    match status {
        StatusCode::NOT_FOUND => IntegrationError::NotFound(error_message(status, &body)),
        StatusCode::UNPROCESSABLE_ENTITY => {
            IntegrationError::InvalidInput(error_message(status, &body))
        }
        _ => {
            warn!(%status, "got an unexpected HTTP error, will pass it on");
            warn!(body = %body, "error body");
            IntegrationError::upstream(status, body)
        }
    }
}

fn content_type(resp: &Response) -> Option<String> {
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Body of a non-2xx answer; empty when it cannot be read.
async fn error_body(resp: Response) -> String {
    resp.text().await.unwrap_or_else(|e| {
        debug!(error = %e, "failed to read error body");
        String::new()
    })
}

/// `message` from a JSON error body, or the status line when there is none.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorMessage>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| status_line(status))
}

/// Decode a 2xx body; blank and `null` bodies are `None`.
fn decode_optional<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes)
}
