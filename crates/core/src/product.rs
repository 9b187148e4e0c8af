//! The catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product as returned by the remote catalog.
///
/// Immutable once fetched; owned by whichever page fetched it. The catalog
/// service assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Remote-assigned identifier, unique within the catalog.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Brand name. Not every catalog entry carries one.
    pub brand: Option<String>,
    /// Category slug (e.g., "smartphones").
    pub category: String,
    /// Unit price, non-negative.
    pub price: Price,
    /// Discount percentage in the 0-100 range, when the product is on sale.
    pub discount_percentage: Option<Decimal>,
    /// Average customer rating.
    pub rating: f64,
    /// Units in stock at the remote catalog.
    pub stock: u32,
    /// Primary image URL.
    pub thumbnail: Option<String>,
    /// Additional image URLs.
    pub images: Vec<String>,
}
