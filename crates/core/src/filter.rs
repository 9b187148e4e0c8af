//! Text filtering over product collections.

use crate::product::Product;

/// Filter products by a case-insensitive substring query.
///
/// A product matches when the query appears in its title, brand, or
/// category. The empty query is the identity filter. The input is not
/// mutated and relative order is preserved, so the function is
/// referentially transparent.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            let matches = |field: &str| field.to_lowercase().contains(&query);
            matches(&product.title)
                || product.brand.as_deref().is_some_and(matches)
                || matches(&product.category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, ProductId};
    use rust_decimal::dec;

    fn product(id: i64, title: &str, brand: Option<&str>, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            brand: brand.map(str::to_string),
            category: category.to_string(),
            price: Price::usd(dec!(10)),
            discount_percentage: None,
            rating: 4.0,
            stock: 5,
            thumbnail: None,
            images: Vec::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", Some("Acme"), "Footwear"),
            product(2, "Blue Hat", Some("Zed"), "Apparel"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let products = catalog();
        let result = filter_products(&products, "");
        let ids: Vec<i64> = result.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let products = catalog();
        let result = filter_products(&products, "red");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(1));
    }

    #[test]
    fn test_brand_match() {
        let products = catalog();
        let result = filter_products(&products, "zed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(2));
    }

    #[test]
    fn test_category_match() {
        let products = catalog();
        let result = filter_products(&products, "FOOT");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(1));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let products = catalog();
        assert!(filter_products(&products, "xyz").is_empty());
    }

    #[test]
    fn test_missing_brand_does_not_match() {
        let products = vec![product(1, "Plain Mug", None, "Kitchen")];
        assert!(filter_products(&products, "acme").is_empty());
        // The empty query still matches via title/category.
        assert_eq!(filter_products(&products, "").len(), 1);
    }

    #[test]
    fn test_order_preserved_across_matches() {
        let products = vec![
            product(3, "Alpha Apparel Rack", None, "Storage"),
            product(1, "Blue Hat", Some("Zed"), "Apparel"),
            product(2, "Wool Socks", None, "Apparel"),
        ];
        let result = filter_products(&products, "apparel");
        let ids: Vec<i64> = result.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
