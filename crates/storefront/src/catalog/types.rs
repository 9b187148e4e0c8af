//! Wire types for the catalog API.
//!
//! These mirror the catalog's JSON shapes (camelCase fields, float prices)
//! and convert into the clean domain types in `vitrine_core`. Route handlers
//! never see a wire type.

use rust_decimal::Decimal;
use serde::Deserialize;
use vitrine_core::{Price, Product, ProductId};

/// The product collection envelope (`GET /products`).
#[derive(Debug, Deserialize)]
pub struct ProductListData {
    /// The requested page of products.
    pub products: Vec<ProductData>,
    /// Total products in the catalog.
    #[serde(default)]
    pub total: u64,
    /// Offset applied by the catalog.
    #[serde(default)]
    pub skip: u64,
    /// Page size applied by the catalog.
    #[serde(default)]
    pub limit: u64,
}

/// A single product record as the catalog serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    /// Unit price as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<ProductData> for Product {
    fn from(data: ProductData) -> Self {
        Self {
            id: ProductId::new(data.id),
            title: data.title,
            description: data.description,
            brand: data.brand,
            category: data.category,
            price: Price::usd(data.price),
            // A zero discount means "not on sale".
            discount_percentage: data.discount_percentage.filter(|d| *d > Decimal::ZERO),
            rating: data.rating,
            stock: data.stock,
            thumbnail: data.thumbnail,
            images: data.images,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "iPhone 9",
        "description": "An apple mobile which is nothing like apple",
        "price": 549.99,
        "discountPercentage": 12.96,
        "rating": 4.69,
        "stock": 94,
        "brand": "Apple",
        "category": "smartphones",
        "thumbnail": "https://cdn.example.com/products/1/thumbnail.jpg",
        "images": [
            "https://cdn.example.com/products/1/1.jpg",
            "https://cdn.example.com/products/1/2.jpg"
        ]
    }"#;

    #[test]
    fn test_deserialize_product() {
        let data: ProductData = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(data.id, 1);
        assert_eq!(data.price, dec!(549.99));
        assert_eq!(data.discount_percentage, Some(dec!(12.96)));
        assert_eq!(data.brand.as_deref(), Some("Apple"));
        assert_eq!(data.images.len(), 2);
    }

    #[test]
    fn test_convert_to_domain_product() {
        let data: ProductData = serde_json::from_str(PRODUCT_JSON).unwrap();
        let product = Product::from(data);
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.display(), "$549.99");
        assert_eq!(product.discount_percentage, Some(dec!(12.96)));
        assert_eq!(product.category, "smartphones");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": 7, "title": "Mystery Box", "category": "misc", "price": 5}"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        let product = Product::from(data);
        assert_eq!(product.brand, None);
        assert_eq!(product.discount_percentage, None);
        assert_eq!(product.stock, 0);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_zero_discount_means_not_on_sale() {
        let json = r#"{"id": 2, "title": "Socks", "category": "apparel", "price": 3.5, "discountPercentage": 0}"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        let product = Product::from(data);
        assert_eq!(product.discount_percentage, None);
    }

    #[test]
    fn test_deserialize_list_envelope() {
        let json = format!(r#"{{"products": [{PRODUCT_JSON}], "total": 100, "skip": 0, "limit": 30}}"#);
        let data: ProductListData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.products.len(), 1);
        assert_eq!(data.total, 100);
        assert_eq!(data.limit, 30);
    }
}
