//! Remote catalog API client.
//!
//! # Architecture
//!
//! - Plain REST JSON over `reqwest` - the catalog is source of truth, NO
//!   local sync, direct API calls
//! - In-memory caching via `moka` for read responses (5 minute TTL)
//! - Read-only: the storefront never writes to the catalog
//!
//! # Endpoints
//!
//! - `GET {base}/products?limit=N` - product collection
//! - `GET {base}/products/{id}` - single product (404 when absent)
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! let products = client.list_products().await?;
//! let product = client.get_product(ProductId::new(1)).await?;
//! ```

mod cache;
mod client;
pub mod types;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when interacting with the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, transport).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Catalog returned a non-success status other than 404.
    #[error("Catalog returned HTTP {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Truncated response body for diagnostics.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("Product not found: 123".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found: 123");
    }

    #[test]
    fn test_status_error_display() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            detail: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned HTTP 500 Internal Server Error: boom"
        );
    }
}
