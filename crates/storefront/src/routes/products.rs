//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use vitrine_core::{Product, ProductId, filter_products};

use crate::error::Result;
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub brand: Option<String>,
    pub category: String,
    /// Formatted unit price (e.g., "$549.99").
    pub price: String,
    /// Formatted pre-discount price, when the product is on sale.
    pub compare_at_price: Option<String>,
    /// Badge text like "13% OFF", when the product is on sale.
    pub discount_label: Option<String>,
    pub rating: f64,
    pub stock: u32,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
}

/// Format a discount percentage as a badge label.
pub(crate) fn discount_label(discount_percentage: Option<Decimal>) -> Option<String> {
    discount_percentage.map(|d| {
        format!(
            "{}% OFF",
            d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        )
    })
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price.display(),
            compare_at_price: product
                .discount_percentage
                .and_then(|d| product.price.compare_at(d))
                .map(|p| p.display()),
            discount_label: discount_label(product.discount_percentage),
            rating: product.rating,
            stock: product.stock,
            thumbnail: product.thumbnail.clone(),
            images: product.images.clone(),
        }
    }
}

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive text filter over title, brand, and category.
    #[serde(default)]
    pub q: String,
}

/// Product listing payload.
#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub products: Vec<ProductView>,
    pub total: usize,
    pub query: String,
}

/// Product listing, optionally filtered by `?q=`.
///
/// A catalog failure degrades to an empty listing rather than an error
/// response; it is logged here and never reaches the cart or the filter.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductListView> {
    let products = match state.catalog().list_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!("Failed to fetch product listing: {e}");
            Vec::new()
        }
    };

    let matches = filter_products(&products, &query.q);

    Json(ProductListView {
        total: matches.len(),
        products: matches.into_iter().map(ProductView::from).collect(),
        query: query.q,
    })
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>> {
    let product = state.catalog().get_product(ProductId::new(id)).await?;
    Ok(Json(ProductView::from(&product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use vitrine_core::Price;

    fn sale_product() -> Product {
        Product {
            id: ProductId::new(1),
            title: "iPhone 9".to_string(),
            description: String::new(),
            brand: Some("Apple".to_string()),
            category: "smartphones".to_string(),
            price: Price::usd(dec!(549)),
            discount_percentage: Some(dec!(12.96)),
            rating: 4.69,
            stock: 94,
            thumbnail: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_product_view_formats_prices() {
        let view = ProductView::from(&sale_product());
        assert_eq!(view.price, "$549.00");
        assert_eq!(view.compare_at_price.as_deref(), Some("$631.00"));
        assert_eq!(view.discount_label.as_deref(), Some("13% OFF"));
    }

    #[test]
    fn test_product_view_without_discount() {
        let mut product = sale_product();
        product.discount_percentage = None;
        let view = ProductView::from(&product);
        assert_eq!(view.compare_at_price, None);
        assert_eq!(view.discount_label, None);
    }

    #[test]
    fn test_discount_label_rounds_half_up() {
        assert_eq!(discount_label(Some(dec!(12.5))).as_deref(), Some("13% OFF"));
        assert_eq!(discount_label(Some(dec!(7.4))).as_deref(), Some("7% OFF"));
        assert_eq!(discount_label(None), None);
    }
}
