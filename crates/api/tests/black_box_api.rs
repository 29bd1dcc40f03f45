use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode;
use serde_json::Value;

use storefront_api::CompositeConfig;
use storefront_core::ServiceAddressResolver;
use storefront_infra::{DownstreamConfig, ServiceEndpoint};

struct TestServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        // Same routers as prod, bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, handle }
    }

    fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.addr.ip().to_string(), self.addr.port())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Mock backends plus the composite in front of them.
struct Landscape {
    composite: TestServer,
    _backends: [TestServer; 3],
}

impl Landscape {
    async fn spawn() -> Self {
        let product = TestServer::spawn(storefront_backends::product::router(Arc::new(
            ServiceAddressResolver::fixed("product-1:7001"),
        )))
        .await;
        let recommendation = TestServer::spawn(storefront_backends::recommendation::router(
            Arc::new(ServiceAddressResolver::fixed("recommendation-1:7002")),
        ))
        .await;
        let review = TestServer::spawn(storefront_backends::review::router(Arc::new(
            ServiceAddressResolver::fixed("review-1:7003"),
        )))
        .await;

        let config = CompositeConfig {
            bind_host: "127.0.0.1".to_string(),
            port: 0,
            downstream: DownstreamConfig {
                product: product.endpoint(),
                recommendation: recommendation.endpoint(),
                review: review.endpoint(),
            },
        };
        let composite = TestServer::spawn(storefront_api::app::build_app(
            &config,
            Arc::new(ServiceAddressResolver::fixed("composite-1:7000")),
        ))
        .await;

        Self {
            composite,
            _backends: [product, recommendation, review],
        }
    }

    async fn get_composite(&self, product_id: &str) -> (StatusCode, Value) {
        let res = reqwest::Client::new()
            .get(format!("http://{}/product-composite/{}", self.composite.addr, product_id))
            .send()
            .await
            .unwrap();
        let status = res.status();
        let body = res.json().await.unwrap();
        (status, body)
    }
}

#[tokio::test]
async fn composite_merges_all_three_services() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productId"], 1);
    assert_eq!(body["name"], "name-1");
    assert_eq!(body["weight"], 123);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 3);
    assert_eq!(body["recommendations"][0]["recommendationId"], 1);
    assert_eq!(body["reviews"][2]["subject"], "Subject 3");

    let addrs = &body["serviceAddresses"];
    assert_eq!(addrs["cmp"], "composite-1:7000");
    assert_eq!(addrs["pro"], "product-1:7001");
    assert_eq!(addrs["rec"], "recommendation-1:7002");
    assert_eq!(addrs["rev"], "review-1:7003");
}

#[tokio::test]
async fn missing_product_is_404() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("13").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No product found for productId: 13");
    assert_eq!(body["path"], "/product-composite/13");
    assert_eq!(body["httpStatus"], "NOT_FOUND");
}

#[tokio::test]
async fn invalid_product_id_is_422_with_upstream_message() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("-1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid productId: -1");
}

#[tokio::test]
async fn product_without_recommendations_has_empty_rec_address() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("113").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["recommendations"].as_array().unwrap().is_empty());
    assert_eq!(body["reviews"].as_array().unwrap().len(), 3);
    assert_eq!(body["serviceAddresses"]["rec"], "");
    assert_eq!(body["serviceAddresses"]["rev"], "review-1:7003");
}

#[tokio::test]
async fn product_without_reviews_has_empty_rev_address() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("213").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["reviews"].as_array().unwrap().is_empty());
    assert_eq!(body["serviceAddresses"]["rev"], "");
    assert_eq!(body["serviceAddresses"]["rec"], "recommendation-1:7002");
}

#[tokio::test]
async fn non_numeric_product_id_is_400() {
    let landscape = Landscape::spawn().await;

    let (status, body) = landscape.get_composite("abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Type mismatch.");
}

#[tokio::test]
async fn health_reports_up() {
    let landscape = Landscape::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/health", landscape.composite.addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["serviceAddress"], "composite-1:7000");
}
