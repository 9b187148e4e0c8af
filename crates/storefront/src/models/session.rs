//! Session-related types.
//!
//! The cart is serialized directly into the session; there is no other
//! per-session state. With the in-memory store this gives the cart exactly
//! the lifetime the storefront needs: created empty on first use, gone when
//! the session (or the process) ends.

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the session's cart.
    pub const CART: &str = "cart";
}
