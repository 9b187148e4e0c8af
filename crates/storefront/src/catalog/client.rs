//! Catalog API client implementation.
//!
//! Uses `reqwest` for HTTP and caches read responses with `moka`
//! (5-minute TTL). Both operations are plain GETs; failures surface as
//! [`CatalogError`] and are handled at the page level.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;
use vitrine_core::{Product, ProductId};

use crate::catalog::CatalogError;
use crate::catalog::cache::CacheValue;
use crate::catalog::types::{ProductData, ProductListData};
use crate::config::CatalogConfig;

/// Client for the remote catalog API.
///
/// Provides read-only access to the product collection and individual
/// products. Responses are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    page_size: u32,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                page_size: config.page_size,
                cache,
            }),
        }
    }

    /// Execute a GET request and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.path().to_string()));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                detail: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the product collection.
    ///
    /// The listing is bounded by the configured page size and cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let mut url = self.inner.base_url.join("products")?;
        url.query_pairs_mut()
            .append_pair("limit", &self.inner.page_size.to_string());

        let data: ProductListData = self.get_json(url).await?;
        let products: Vec<Product> = data.products.into_iter().map(Product::from).collect();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the catalog does not know the
    /// identifier, or another error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{product_id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = self.inner.base_url.join(&format!("products/{product_id}"))?;

        let data: ProductData = match self.get_json(url).await {
            Ok(data) => data,
            Err(CatalogError::NotFound(_)) => {
                return Err(CatalogError::NotFound(format!(
                    "Product not found: {product_id}"
                )));
            }
            Err(e) => return Err(e),
        };

        let product = Product::from(data);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }
}
