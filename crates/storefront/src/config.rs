//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_BASE_URL` - Remote catalog base URL (default: <https://dummyjson.com>)
//! - `CATALOG_PAGE_SIZE` - Products fetched per listing request (default: 100)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_PAGE_SIZE: u32 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
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
    /// Remote catalog configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Remote catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service (e.g., <https://dummyjson.com>)
    pub base_url: Url,
    /// Number of products requested per listing fetch
    pub page_size: u32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let catalog = CatalogConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            catalog,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string())
            })?;
        let page_size = match get_optional_env("CATALOG_PAGE_SIZE") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_PAGE_SIZE".to_string(), e.to_string())
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            base_url,
            page_size,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
