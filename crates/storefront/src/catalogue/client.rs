//! Catalogue API client implementation.
//!
//! Uses `reqwest` 0.13 for HTTP and the core decoders for validation.
//! Nothing is cached: every load is one fresh GET.

use std::sync::Arc;
use std::time::Instant;

use guitarguitar_core::{CollectionError, Customer, FromJson, Order, Product, decode_collection};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::{CUSTOMERS, CatalogueError, ORDERS, PRODUCTS};
use crate::config::CatalogueConfig;

// =============================================================================
// CatalogueClient
// =============================================================================

/// Client for the guitarguitar catalogue API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogueClient {
    inner: Arc<CatalogueClientInner>,
}

struct CatalogueClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogueClient {
    /// Create a new catalogue client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Client` if the HTTP client cannot be built.
    pub fn new(config: &CatalogueConfig) -> Result<Self, CatalogueError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("guitarguitar-storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogueError::Client)?;

        Ok(Self {
            inner: Arc::new(CatalogueClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL all endpoints are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Full URL for an endpoint, always with a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::InvalidEndpoint` if the path cannot be joined.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, CatalogueError> {
        let path = format!("{}/", endpoint.trim_matches('/'));
        self.inner
            .base_url
            .join(&path)
            .map_err(|source| CatalogueError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                source,
            })
    }

    /// Fetch an endpoint and decode every element as `T`.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on connection failure or timeout, `Fetch` on a
    /// non-200 status, `Parse` if the body is not JSON, `Shape` if it is not
    /// an array and `Decode` for the first element that fails.
    #[instrument(skip(self), fields(record = T::CONTEXT))]
    pub async fn load_collection<T: FromJson>(
        &self,
        endpoint: &str,
    ) -> Result<Vec<T>, CatalogueError> {
        let url = self.endpoint_url(endpoint)?;
        let started = Instant::now();

        let response = self
            .inner
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| transport_error(endpoint, source))?;

        let status = response.status();

        // Read the body first so non-200 responses can be reported
        let body = response
            .text()
            .await
            .map_err(|source| transport_error(endpoint, source))?;

        if status != reqwest::StatusCode::OK {
            tracing::error!(
                endpoint,
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalogue API returned non-200 status"
            );
            return Err(CatalogueError::Fetch {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|source| {
            tracing::error!(endpoint, error = %source, "Catalogue API returned invalid JSON");
            CatalogueError::Parse {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        let records = decode_collection::<T>(&value).map_err(|e| {
            tracing::error!(endpoint, error = %e, "Catalogue response failed to decode");
            match e {
                CollectionError::Shape { actual } => CatalogueError::Shape {
                    endpoint: endpoint.to_string(),
                    actual,
                },
                CollectionError::Element { index, source } => CatalogueError::Decode {
                    endpoint: endpoint.to_string(),
                    index,
                    source,
                },
            }
        })?;

        tracing::info!(
            endpoint,
            count = records.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Loaded catalogue collection"
        );

        Ok(records)
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Load every customer.
    ///
    /// # Errors
    ///
    /// See [`Self::load_collection`].
    pub async fn load_customers(&self) -> Result<Vec<Customer>, CatalogueError> {
        self.load_collection(CUSTOMERS).await
    }

    /// Load every product.
    ///
    /// # Errors
    ///
    /// See [`Self::load_collection`].
    pub async fn load_products(&self) -> Result<Vec<Product>, CatalogueError> {
        self.load_collection(PRODUCTS).await
    }

    /// Load every order, including embedded products.
    ///
    /// # Errors
    ///
    /// See [`Self::load_collection`].
    pub async fn load_orders(&self) -> Result<Vec<Order>, CatalogueError> {
        self.load_collection(ORDERS).await
    }
}

fn transport_error(endpoint: &str, source: reqwest::Error) -> CatalogueError {
    if source.is_timeout() {
        tracing::error!(endpoint, error = %source, "Catalogue request timed out");
    } else {
        tracing::error!(endpoint, error = %source, "Catalogue request failed");
    }
    CatalogueError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::DEFAULT_CATALOGUE_API_URL;

    fn client_for(base_url: &str) -> CatalogueClient {
        let config = CatalogueConfig::new(base_url, 5).unwrap();
        CatalogueClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_under_base() {
        let client = client_for(DEFAULT_CATALOGUE_API_URL);
        assert_eq!(
            client.endpoint_url(ORDERS).unwrap().as_str(),
            "https://www.guitarguitar.co.uk/hackathon/orders/"
        );
        assert_eq!(
            client.endpoint_url("/customers/").unwrap().as_str(),
            "https://www.guitarguitar.co.uk/hackathon/customers/"
        );
    }

    #[tokio::test]
    async fn test_load_orders_literal_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "Id": 1,
                "CustomerId": 2,
                "ShippingAddress": {
                    "city": "York",
                    "street_name": "Main",
                    "street_address": "1 Main St",
                    "zip_code": "Y1 1AA",
                    "country": "UK"
                },
                "Products": [],
                "DateCreated": "2024-01-01",
                "OrderTotal": 0.0,
                "OrderStatus": 1
            }])))
            .mount(&server)
            .await;

        let orders = client_for(&server.uri()).load_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, guitarguitar_core::OrderStatus::Placed);
        assert!(orders[0].products.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).load_customers().await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert!(matches!(err, CatalogueError::Fetch { ref body, .. } if body == "gone"));
    }
}
