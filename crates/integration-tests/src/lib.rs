//! Integration tests for the guitarguitar storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p guitarguitar-integration-tests
//!
//! # Include the tests that hit the live catalogue API
//! cargo test -p guitarguitar-integration-tests -- --include-ignored
//! ```
//!
//! Every test except the live ones runs against a `wiremock` server standing
//! in for the catalogue API.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use guitarguitar_storefront::config::{CatalogueConfig, StorefrontConfig};
use guitarguitar_storefront::state::AppState;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

/// A mock catalogue API plus storefront state pointing at it.
pub struct TestContext {
    pub server: MockServer,
    pub state: AppState,
}

impl TestContext {
    /// Start a mock catalogue API with a 2 second client timeout.
    ///
    /// # Panics
    ///
    /// Panics if the storefront state cannot be built.
    pub async fn new() -> Self {
        Self::with_timeout(2).await
    }

    /// Start a mock catalogue API with the given client timeout.
    ///
    /// # Panics
    ///
    /// Panics if the storefront state cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn with_timeout(timeout_secs: u64) -> Self {
        let server = MockServer::start().await;
        let config = test_config(&server.uri(), timeout_secs);
        let state = AppState::new(config).expect("Failed to build test state");
        Self { server, state }
    }

    /// Serve `body` as JSON from `<endpoint>/`.
    pub async fn mount_json(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve a raw body with the given status from `<endpoint>/`.
    pub async fn mount_raw(&self, endpoint: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}/")))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Build the storefront router.
    ///
    /// Each call creates a fresh session store; clone the router to keep
    /// sessions across requests.
    #[must_use]
    pub fn app(&self) -> Router {
        guitarguitar_storefront::app(self.state.clone())
    }
}

/// Storefront configuration pointing at `catalogue_url`.
///
/// # Panics
///
/// Panics if `catalogue_url` is not a valid http(s) URL or the timeout is 0.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_config(catalogue_url: &str, timeout_secs: u64) -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost".to_string(),
        catalogue: CatalogueConfig::new(catalogue_url, timeout_secs)
            .expect("Invalid catalogue URL"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}
