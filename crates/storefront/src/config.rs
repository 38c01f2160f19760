//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 8000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: http://localhost:8000)
//! - `CATALOGUE_API_URL` - Catalogue API base URL (default: https://www.guitarguitar.co.uk/hackathon/)
//! - `CATALOGUE_TIMEOUT_SECS` - Per-request timeout for catalogue calls (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default catalogue API base URL.
pub const DEFAULT_CATALOGUE_API_URL: &str = "https://www.guitarguitar.co.uk/hackathon/";

/// Default per-request timeout for catalogue calls.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Catalogue API configuration
    pub catalogue: CatalogueConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Catalogue API configuration.
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Base URL; always ends with `/` so endpoint paths join beneath it.
    pub base_url: Url,
    /// Timeout applied to every catalogue request.
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_parsed("STOREFRONT_HOST", "127.0.0.1")?;
        let port = get_env_parsed("STOREFRONT_PORT", "8000")?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:8000");
        let catalogue = CatalogueConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            catalogue,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_env_parsed("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: get_env_parsed("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl CatalogueConfig {
    /// Load catalogue settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL or timeout is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("CATALOGUE_API_URL", DEFAULT_CATALOGUE_API_URL);
        let timeout_secs: u64 =
            get_env_parsed("CATALOGUE_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())?;

        Self::from_env_values(&base_url, timeout_secs)
    }

    /// Validate environment values, blaming the variable that is wrong.
    fn from_env_values(base_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOGUE_TIMEOUT_SECS".to_string(),
                "timeout must be greater than zero".to_string(),
            ));
        }

        Self::new(base_url, timeout_secs)
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOGUE_API_URL".to_string(), e))
    }

    /// Build a catalogue configuration from a base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the URL does not parse, is not
    /// http(s), or the timeout is zero.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, String> {
        if timeout_secs == 0 {
            return Err("timeout must be greater than zero".to_string());
        }

        let mut url = Url::parse(base_url).map_err(|e| e.to_string())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme '{}'", url.scheme()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable parsed as `T`, falling back to `default`.
fn get_env_parsed<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
