//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (?category= filter)
//! GET  /product/{product_id}   - Product detail (404 page for unknown ids)
//!
//! # Cart (form posts, 303 back to `return_to`)
//! GET  /cart                   - Cart page
//! GET  /cart/count             - Cart item count (plain text)
//! POST /cart/add               - Add one unit, open the panel
//! POST /cart/update            - Set quantity (< 1 removes)
//! POST /cart/remove            - Remove line
//! POST /cart/clear             - Empty the cart
//! POST /cart/open              - Show the cart panel
//! POST /cart/close             - Hide the cart panel
//!
//! # Everything else
//! *                            - Not-found page (404)
//! ```

pub mod cart;
pub mod home;
pub mod not_found;
pub mod products;
pub mod shell;

use axum::{
    Router,
    routing::{get, post},
};

use crate::config::StorefrontConfig;
use crate::middleware::api_rate_limiter;
use crate::state::AppState;

/// Create the cart routes router.
///
/// Mutations are rate limited per client IP; `trust_proxy_headers` decides
/// whether forwarding headers may name that IP.
pub fn cart_routes(trust_proxy_headers: bool) -> Router<AppState> {
    let mutations = Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .layer(api_rate_limiter(trust_proxy_headers));

    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .merge(mutations)
}

/// Build the complete routes router.
pub fn routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/product/{product_id}", get(products::show))
        .nest("/cart", cart_routes(config.trust_proxy_headers))
        .fallback(not_found::not_found)
}
