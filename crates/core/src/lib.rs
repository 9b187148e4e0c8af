//! Vitrine Core - Domain types and cart logic.
//!
//! This crate provides the types and pure logic shared by the Vitrine
//! components:
//! - `storefront` - Public-facing storefront service
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no session handling. The cart and the product filter never
//! suspend and never touch the network; fetch failures are a storefront
//! concern and stay there.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`product`] - The immutable catalog product record
//! - [`cart`] - Session-scoped shopping cart state
//! - [`filter`] - Text filtering over product collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod product;
pub mod types;

pub use cart::{Cart, CartItem};
pub use filter::filter_products;
pub use product::Product;
pub use types::*;
