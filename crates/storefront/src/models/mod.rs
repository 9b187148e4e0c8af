//! Domain models for storefront.

pub mod session;
