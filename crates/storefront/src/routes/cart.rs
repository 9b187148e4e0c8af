//! Cart route handlers.
//!
//! The session owns the cart: each handler loads it, applies one cart
//! operation, stores it back, and returns the refreshed view so badges and
//! totals update. All mutation goes through the operations on
//! [`vitrine_core::Cart`]; nothing here caches derived totals.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use vitrine_core::{Cart, CartItem, CurrencyCode, ProductId};

use crate::error::Result;
use crate::models::session::keys;
use crate::routes::products::discount_label;
use crate::state::AppState;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: i64,
    pub title: String,
    pub brand: Option<String>,
    pub quantity: u32,
    /// Formatted unit price.
    pub price: String,
    /// Formatted line total (`price x quantity`).
    pub line_price: String,
    /// Formatted pre-discount line total, when the item is on sale.
    /// Rendered struck through next to `line_price`.
    pub compare_at_line_price: Option<String>,
    /// Badge text like "13% OFF", when the item is on sale.
    pub discount_label: Option<String>,
    pub thumbnail: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted subtotal; the exact value is rounded only here.
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            // Single-currency catalog; the subtotal shares the items' currency.
            subtotal: CurrencyCode::default().format(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.as_i64(),
            title: item.product.title.clone(),
            brand: item.product.brand.clone(),
            quantity: item.quantity,
            price: item.product.price.display(),
            line_price: item.product.price.currency_code().format(item.line_total()),
            compare_at_line_price: item
                .product
                .discount_percentage
                .and_then(|d| item.product.price.compare_at(d))
                .map(|p| {
                    p.currency_code()
                        .format(p.amount() * Decimal::from(item.quantity))
                }),
            discount_label: discount_label(item.product.discount_percentage),
            thumbnail: item.product.thumbnail.clone(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session's cart, defaulting to an empty one.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the cart back into the session.
async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Current cart contents.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Json<CartView> {
    let cart = load_cart(&session).await;
    Json(CartView::from(&cart))
}

/// Add one unit of a product to the cart.
///
/// The product record is fetched from the catalog so the cart owns a
/// complete copy; an unknown identifier is a 404 and the cart is untouched.
/// Adding a product already in the cart increments its quantity.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = state.catalog().get_product(req.product_id).await?;

    let mut cart = load_cart(&session).await;
    cart.add(product);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Set the quantity for a cart item. Quantity 0 removes the item.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(req): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await;
    cart.set_quantity(req.product_id, req.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a product from the cart. No-op when absent.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await;
    cart.remove(req.product_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Cart count badge value.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<CartCountView> {
    let cart = load_cart(&session).await;
    Json(CartCountView {
        count: cart.item_count(),
    })
}
