//! Live catalogue checks.
//!
//! # Usage
//!
//! ```bash
//! gg-cli check all
//! gg-cli check products --timeout 30
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOGUE_API_URL` - Base URL (default: https://www.guitarguitar.co.uk/hackathon/)
//! - `CATALOGUE_TIMEOUT_SECS` - Request timeout (default: 10)

use guitarguitar_core::{BodyShape, Colour, Pickup, Product};
use guitarguitar_storefront::catalogue::{CatalogueClient, CatalogueError};
use guitarguitar_storefront::config::{CatalogueConfig, ConfigError};
use thiserror::Error;

use super::Collection;

/// Errors that can occur during a live check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line overrides are invalid.
    #[error("Invalid catalogue settings: {0}")]
    InvalidSettings(String),

    /// Fetching or decoding failed.
    #[error("{0}")]
    Catalogue(#[from] CatalogueError),
}

/// Build a catalogue client from the environment plus CLI overrides.
///
/// # Errors
///
/// Returns `CheckError` if the settings are invalid.
pub fn client(api_url: Option<&str>, timeout: Option<u64>) -> Result<CatalogueClient, CheckError> {
    dotenvy::dotenv().ok();

    let env = CatalogueConfig::from_env()?;
    let config = if api_url.is_none() && timeout.is_none() {
        env
    } else {
        CatalogueConfig::new(
            api_url.unwrap_or_else(|| env.base_url.as_str()),
            timeout.unwrap_or_else(|| env.timeout.as_secs()),
        )
        .map_err(CheckError::InvalidSettings)?
    };

    Ok(CatalogueClient::new(&config)?)
}

/// Load one collection and report how many records decoded.
///
/// # Errors
///
/// Returns the first fetch or decode failure.
pub async fn run(client: &CatalogueClient, collection: Collection) -> Result<usize, CheckError> {
    let endpoint = collection.endpoint();
    tracing::info!("Checking {} at {}", endpoint, client.base_url());

    let count = match collection {
        Collection::Customers => client.load_customers().await?.len(),
        Collection::Products => {
            let products = client.load_products().await?;
            report_unknown_codes(endpoint, &products);
            products.len()
        }
        Collection::Orders => {
            let orders = client.load_orders().await?;
            let embedded: Vec<Product> = orders
                .iter()
                .flat_map(|o| o.products.iter().cloned())
                .collect();
            report_unknown_codes(endpoint, &embedded);
            orders.len()
        }
    };

    tracing::info!("{}: {} records decoded", endpoint, count);
    Ok(count)
}

/// Number of products with at least one unrecognised attribute code.
#[must_use]
pub fn unknown_code_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| {
            p.colour == Colour::Unknown
                || p.pickup == Pickup::Unknown
                || p.body_shape == BodyShape::Unknown
        })
        .count()
}

fn report_unknown_codes(endpoint: &str, products: &[Product]) {
    let unknown = unknown_code_count(products);
    if unknown > 0 {
        tracing::warn!(
            "{}: {} of {} products have unrecognised colour, pickup or body shape codes",
            endpoint,
            unknown,
            products.len()
        );
    }
}
