//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Health check
//!
//! # Products
//! GET  /products            - Product listing, ?q= text filter
//! GET  /products/{id}       - Product detail
//!
//! # Cart
//! GET  /cart                - Cart contents
//! POST /cart/add            - Add one unit of a product
//! POST /cart/update         - Set item quantity (0 removes)
//! POST /cart/remove         - Remove an item
//! GET  /cart/count          - Cart count badge value
//! ```

pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete application router with session and trace layers.
///
/// Sentry layers are added on top by the binary; tests drive this router
/// directly.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
