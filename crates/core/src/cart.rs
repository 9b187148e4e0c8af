//! Session-scoped shopping cart state.
//!
//! The cart is an owned value: handlers load it, mutate it through the
//! operations below, and store it back. All mutation funnels through
//! [`Cart::add`], [`Cart::remove`], and [`Cart::set_quantity`]; totals and
//! counts are derived fresh on every read rather than cached, so there is
//! no invalidation to get wrong.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// A product paired with a quantity.
///
/// Identity is the product identifier: a cart never holds two items for the
/// same product. Quantity is always at least 1; an update that would drop it
/// to zero removes the item instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Number of units, >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Exact line total (`price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// An ordered collection of cart items for one session.
///
/// Insertion order is the display order. Created empty, never persisted;
/// the session store owns its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new item with quantity 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove a product entirely. Silent no-op if it is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Set the quantity for a product already in the cart.
    ///
    /// A quantity of 0 removes the item, preserving the >= 1 invariant.
    /// Unknown identifiers are a silent no-op, not an error.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Exact subtotal over all items, recomputed on each call.
    ///
    /// Rounding to two decimal places is a presentation concern; see
    /// [`crate::types::CurrencyCode::format`].
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all items, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The items in display order, read-only.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
