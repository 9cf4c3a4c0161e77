//! Cart store extractor.
//!
//! `CartStore` is the handle handlers use to read and change the visitor's
//! cart. It wraps the tower-sessions `Session`: each operation loads the
//! cart, applies a pure [`Cart`] method, writes it back, and queues the
//! resulting notice as a flash message for the next page render.

use axum::{extract::FromRequestParts, http::request::Parts};
use simple_market_core::{Cart, CartNotice};
use tower_sessions::Session;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{Flash, session_keys};

/// Extractor giving access to the session's cart.
///
/// Rejects with [`AppError::CartUnavailable`] if the route is not wrapped in
/// the session layer; that is a wiring mistake, not a user error.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(store: CartStore) -> Result<String> {
///     let cart = store.load().await?;
///     Ok(cart.total_items().to_string())
/// }
/// ```
#[derive(Clone)]
pub struct CartStore {
    session: Session,
}

impl<S> FromRequestParts<S> for CartStore
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let session = parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            tracing::error!("CartStore used on a route without SessionManagerLayer");
            AppError::CartUnavailable("session layer is not installed")
        })?;

        Ok(Self::new(session))
    }
}

impl CartStore {
    /// Wrap an existing session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Current cart, or an empty one for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(&self) -> Result<Cart> {
        Ok(self
            .session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    /// Apply `op` to the cart and persist the result.
    ///
    /// If `op` returns a notice it is logged and queued as a flash message.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read or written.
    pub async fn update<F>(&self, action: &'static str, op: F) -> Result<Cart>
    where
        F: FnOnce(&mut Cart) -> Option<CartNotice>,
    {
        let mut cart = self.load().await?;
        let notice = op(&mut cart);
        self.session.insert(session_keys::CART, &cart).await?;

        let total_items = cart.total_items();
        tracing::info!(action, total_items, "cart updated");
        add_breadcrumb("cart", action, None);

        if let Some(notice) = notice {
            self.push_flash(Flash::from(&notice)).await?;
        }

        Ok(cart)
    }

    /// Queue a flash message.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read or written.
    pub async fn push_flash(&self, flash: Flash) -> Result<()> {
        let mut flashes = self
            .session
            .get::<Vec<Flash>>(session_keys::FLASHES)
            .await?
            .unwrap_or_default();
        flashes.push(flash);
        self.session.insert(session_keys::FLASHES, flashes).await?;
        Ok(())
    }

    /// Remove and return all queued flash messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read or written.
    pub async fn take_flashes(&self) -> Result<Vec<Flash>> {
        Ok(self
            .session
            .remove::<Vec<Flash>>(session_keys::FLASHES)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use simple_market_core::{Catalog, ProductId};

    use super::*;
    use crate::middleware::session::MokaSessionStore;

    fn store() -> CartStore {
        let backing = MokaSessionStore::new(16, Duration::from_secs(60));
        CartStore::new(Session::new(None, Arc::new(backing), None))
    }

    fn product(id: i32) -> simple_market_core::Product {
        Catalog::fixture()
            .find(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_session_has_empty_cart() {
        let store = store();
        let cart = store.load().await.unwrap();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
    }

    #[tokio::test]
    async fn test_update_persists_and_queues_flash() {
        let store = store();
        store
            .update("add", |cart| Some(cart.add(product(3))))
            .await
            .unwrap();
        store
            .update("add", |cart| Some(cart.add(product(3))))
            .await
            .unwrap();

        let cart = store.load().await.unwrap();
        assert_eq!(cart.total_items(), 2);
        assert!(cart.is_open());

        let flashes = store.take_flashes().await.unwrap();
        let messages: Vec<&str> = flashes.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Added Smart Watch to your cart",
                "Added another Smart Watch to your cart",
            ]
        );
    }

    #[tokio::test]
    async fn test_take_flashes_drains_queue() {
        let store = store();
        store.update("clear", |cart| Some(cart.clear())).await.unwrap();

        assert_eq!(store.take_flashes().await.unwrap().len(), 1);
        assert!(store.take_flashes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_silent_update_queues_nothing() {
        let store = store();
        store
            .update("remove", |cart| cart.remove(ProductId::new(999)))
            .await
            .unwrap();
        assert!(store.take_flashes().await.unwrap().is_empty());
    }
}
