//! guitarguitar catalogue API integration.
//!
//! # Architecture
//!
//! - `client` - `CatalogueClient`, one awaited GET per collection load
//! - Decoding is delegated to `guitarguitar_core::decode_collection`
//!
//! # Endpoints
//!
//! All endpoints live beneath the configured base URL and return a JSON
//! array:
//!
//! - `customers/` - `Customer` records
//! - `products/` - `Product` records
//! - `orders/` - `Order` records with embedded products

mod client;

pub use client::CatalogueClient;

use guitarguitar_core::{DecodeError, JsonType};
use reqwest::StatusCode;
use thiserror::Error;

/// Endpoint path for customers.
pub const CUSTOMERS: &str = "customers";
/// Endpoint path for products.
pub const PRODUCTS: &str = "products";
/// Endpoint path for orders.
pub const ORDERS: &str = "orders";

/// Upstream bodies longer than this are cut in error messages.
const BODY_PREVIEW_LEN: usize = 200;

/// Errors that can occur when loading a collection from the catalogue API.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The endpoint path could not be joined onto the base URL.
    #[error("Invalid endpoint URL for {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection failure or timeout.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with something other than 200.
    #[error("{endpoint} returned HTTP {status}: {}", preview(.body))]
    Fetch {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    /// Body was not valid JSON.
    #[error("{endpoint} returned invalid JSON: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value was not an array.
    #[error("{endpoint} returned {actual}, expected array")]
    Shape { endpoint: String, actual: JsonType },

    /// An element failed to decode.
    #[error("{endpoint} element {index}: {source}")]
    Decode {
        endpoint: String,
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl CatalogueError {
    /// HTTP status returned by upstream, if the request got that far.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before a usable response arrived.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Fetch { .. })
    }
}

fn preview(body: &str) -> &str {
    body.char_indices()
        .nth(BODY_PREVIEW_LEN)
        .and_then(|(end, _)| body.get(..end))
        .unwrap_or(body)
}
