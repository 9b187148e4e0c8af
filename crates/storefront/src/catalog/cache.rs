//! Cache types for catalog API responses.

use vitrine_core::Product;

/// Cached value types.
///
/// Only catalog reads are cached; cart state is mutable and never enters
/// this cache.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
}
