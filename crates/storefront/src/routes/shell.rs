//! Page shell shared by every full page.
//!
//! The shell is everything outside the page body: the navigation bar with
//! its cart badge, the slide-over cart panel, and pending flash messages.
//! Handlers take a [`ShellView`] extractor and hand it to their template;
//! `base.html` renders it.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use simple_market_core::{Cart, CartItem};

use crate::error::{AppError, Result};
use crate::middleware::CartStore;
use crate::models::Flash;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub image: String,
    pub href: String,
    pub quantity: u32,
    /// Quantity submitted by the "decrease" control (0 removes the line).
    pub decrease_to: i64,
    /// Quantity submitted by the "increase" control.
    pub increase_to: i64,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub total: String,
    pub item_count: u64,
    pub is_open: bool,
}

impl CartView {
    /// Whether there is anything in the cart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            product_id: item.product.id.as_i32(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            href: format!("/product/{}", item.product.id),
            quantity: item.quantity,
            decrease_to: quantity - 1,
            increase_to: quantity + 1,
            price: item.product.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        // No shipping or tax: the total is the subtotal.
        let total = cart.total_price().to_string();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: total.clone(),
            total,
            item_count: cart.total_items(),
            is_open: cart.is_open(),
        }
    }
}

/// Everything `base.html` needs to render around a page body.
#[derive(Clone)]
pub struct ShellView {
    pub cart: CartView,
    pub flashes: Vec<Flash>,
    /// Request path, used to highlight the active nav link.
    pub path: String,
    /// Path and query to come back to after a cart action.
    pub return_to: String,
}

impl ShellView {
    /// Load the shell for the current request, draining queued flashes.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read or written.
    pub async fn load(store: &CartStore, path: String, return_to: String) -> Result<Self> {
        let cart = store.load().await?;
        let flashes = store.take_flashes().await?;

        Ok(Self {
            cart: CartView::from(&cart),
            flashes,
            path,
            return_to,
        })
    }

    /// Whether `href` is the current page.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.path == href
    }
}

impl<S> FromRequestParts<S> for ShellView
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let store = CartStore::from_request_parts(parts, state).await?;

        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.clone(), |OriginalUri(uri)| uri.clone());
        let path = uri.path().to_string();
        let return_to = uri
            .path_and_query()
            .map_or_else(|| path.clone(), ToString::to_string);

        Self::load(&store, path, return_to).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use simple_market_core::{Catalog, ProductId};

    use super::*;

    #[test]
    fn test_cart_view_from_cart() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        cart.add(catalog.find(ProductId::new(2)).cloned().unwrap());
        cart.add(catalog.find(ProductId::new(2)).cloned().unwrap());
        cart.add(catalog.find(ProductId::new(8)).cloned().unwrap());

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$549.97");
        assert_eq!(view.total, "$549.97");
        assert!(view.is_open);

        let headphones = view.items.first().unwrap();
        assert_eq!(headphones.href, "/product/2");
        assert_eq!(headphones.price, "$249.99");
        assert_eq!(headphones.line_price, "$499.98");
        assert_eq!(headphones.decrease_to, 1);
        assert_eq!(headphones.increase_to, 3);
    }

    #[test]
    fn test_item_count_beyond_u32() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        for id in [1, 2] {
            cart.add(catalog.find(ProductId::new(id)).cloned().unwrap());
            cart.update_quantity(ProductId::new(id), i64::from(u32::MAX));
        }

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "$0.00");
        assert!(!view.is_open);
    }
}
