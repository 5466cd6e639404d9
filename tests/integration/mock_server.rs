//! Mock HTTP server setup for integration tests
#![allow(dead_code)]

use luxiq_sdk::{LuxIqSdk, SdkConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const TEST_API_KEY: &str = "k1";

/// Test fixture that owns a mock LuxIQ API server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create an SDK pointed at the mock server
    pub fn sdk(&self) -> LuxIqSdk {
        LuxIqSdk::initialize(Some(
            SdkConfig::new()
                .api_key(TEST_API_KEY)
                .api_url(&self.base_url),
        ))
        .expect("sdk should initialize against mock server")
    }

    /// Mock an authenticated JSON response
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a JSON response that only matches the given request body
    pub async fn mock_json_with_body(
        &mut self,
        method: &str,
        path: &str,
        request_body: serde_json::Value,
        status: usize,
        body: &str,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_body(Matcher::Json(request_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock an endpoint that must never be hit
    pub async fn mock_never_called(&mut self, method: &str, path: impl Into<Matcher>) -> Mock {
        self.server
            .mock(method, path)
            .expect(0)
            .create_async()
            .await
    }
}
