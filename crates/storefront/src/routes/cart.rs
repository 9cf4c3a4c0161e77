//! Cart route handlers.
//!
//! Cart actions are plain HTML form posts. Each handler applies one cart
//! operation through [`CartStore`] and answers `303 See Other` back to the
//! page the form was on, which then renders the updated badge, panel, and
//! flash message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use simple_market_core::ProductId;
use tracing::instrument;

use super::shell::ShellView;
use crate::error::Result;
use crate::filters;
use crate::middleware::CartStore;
use crate::state::AppState;

/// Where to go when `return_to` is missing or unsafe.
const DEFAULT_RETURN_PATH: &str = "/";

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub return_to: Option<String>,
}

/// Update quantity form data.
///
/// Quantity is signed so that a decrement below 1 reaches the cart as a
/// removal instead of failing to parse.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: i64,
    pub return_to: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
    pub return_to: Option<String>,
}

/// Form data for actions that only navigate back (clear, open, close).
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: ShellView,
}

/// Restrict redirects to local absolute paths.
///
/// Rejects scheme-relative (`//host`) and backslash forms that browsers
/// treat as off-site.
fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => DEFAULT_RETURN_PATH,
    }
}

fn redirect_back(return_to: Option<&str>) -> Redirect {
    Redirect::to(safe_return_path(return_to))
}

/// Display the cart as a page of its own.
#[instrument(skip(shell))]
pub async fn show(shell: ShellView) -> impl IntoResponse {
    CartShowTemplate { shell }
}

/// Cart badge count as plain text.
#[instrument(skip(store))]
pub async fn count(store: CartStore) -> Result<String> {
    let cart = store.load().await?;
    Ok(cart.total_items().to_string())
}

/// Add one unit of a product and open the cart panel.
///
/// Unknown product ids are ignored.
#[instrument(skip(state, store))]
pub async fn add(
    State(state): State<AppState>,
    store: CartStore,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    match state.catalog().find(form.product_id).cloned() {
        Some(product) => {
            store.update("add", |cart| Some(cart.add(product))).await?;
        }
        None => tracing::debug!(product_id = %form.product_id, "ignoring add of unknown product"),
    }

    Ok(redirect_back(form.return_to.as_deref()))
}

/// Set a line's quantity; below 1 removes the line.
#[instrument(skip(store))]
pub async fn update(store: CartStore, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    store
        .update("update_quantity", |cart| {
            cart.update_quantity(form.product_id, form.quantity)
        })
        .await?;

    Ok(redirect_back(form.return_to.as_deref()))
}

/// Remove a line.
#[instrument(skip(store))]
pub async fn remove(store: CartStore, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    store
        .update("remove", |cart| cart.remove(form.product_id))
        .await?;

    Ok(redirect_back(form.return_to.as_deref()))
}

/// Remove every line.
#[instrument(skip(store))]
pub async fn clear(store: CartStore, Form(form): Form<ReturnForm>) -> Result<Redirect> {
    store.update("clear", |cart| Some(cart.clear())).await?;

    Ok(redirect_back(form.return_to.as_deref()))
}

/// Show the cart panel.
#[instrument(skip(store))]
pub async fn open(store: CartStore, Form(form): Form<ReturnForm>) -> Result<Redirect> {
    store
        .update("open", |cart| {
            cart.open();
            None
        })
        .await?;

    Ok(redirect_back(form.return_to.as_deref()))
}

/// Hide the cart panel.
#[instrument(skip(store))]
pub async fn close(store: CartStore, Form(form): Form<ReturnForm>) -> Result<Redirect> {
    store
        .update("close", |cart| {
            cart.close();
            None
        })
        .await?;

    Ok(redirect_back(form.return_to.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path_accepts_local_paths() {
        assert_eq!(safe_return_path(Some("/")), "/");
        assert_eq!(safe_return_path(Some("/product/3")), "/product/3");
        assert_eq!(
            safe_return_path(Some("/products?category=Smart+Home")),
            "/products?category=Smart+Home"
        );
    }

    #[test]
    fn test_safe_return_path_rejects_offsite() {
        for bad in [
            "https://evil.example",
            "//evil.example",
            "/\\evil.example",
            "products",
            "",
            "/\r\nLocation: x",
        ] {
            assert_eq!(safe_return_path(Some(bad)), DEFAULT_RETURN_PATH, "{bad:?}");
        }
        assert_eq!(safe_return_path(None), DEFAULT_RETURN_PATH);
    }
}
