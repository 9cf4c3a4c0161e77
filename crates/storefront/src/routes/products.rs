//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use simple_market_core::{ALL_CATEGORIES, Product, ProductId};
use tracing::instrument;

use super::shell::ShellView;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub href: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

/// Category filter button display data.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub href: String,
    pub selected: bool,
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            href: format!("/product/{}", product.id),
            name: product.name.clone(),
            summary: product.summary.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Link to the catalog filtered by `category`.
fn category_href(category: &str) -> String {
    if category == ALL_CATEGORIES {
        return "/products".to_string();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(category.as_bytes()).collect();
    format!("/products?category={encoded}")
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub shell: ShellView,
    pub categories: Vec<CategoryView>,
    pub selected_category: String,
    pub products: Vec<ProductView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub shell: ShellView,
    pub product: ProductView,
}

/// Product not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub shell: ShellView,
}

/// Display the product listing, filtered by `?category=` (default "All").
#[instrument(skip(state, shell))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
    shell: ShellView,
) -> impl IntoResponse {
    let selected_category = query
        .category
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let catalog = state.catalog();
    let categories = catalog
        .categories()
        .into_iter()
        .map(|name| CategoryView {
            name: name.to_string(),
            href: category_href(name),
            selected: name == selected_category,
        })
        .collect();

    let products: Vec<ProductView> = catalog
        .filter(&selected_category)
        .into_iter()
        .map(ProductView::from)
        .collect();

    tracing::debug!(
        category = %selected_category,
        count = products.len(),
        "catalog filtered"
    );

    ProductsIndexTemplate {
        shell,
        categories,
        selected_category,
        products,
    }
}

/// Display a product detail page.
///
/// Ids that do not parse or do not match a product render the not-found
/// page with a 404 status.
#[instrument(skip(state, shell))]
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    shell: ShellView,
) -> Response {
    let delay = state.config().detail_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let product = product_id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().find(id));

    match product {
        Some(product) => ProductShowTemplate {
            shell,
            product: ProductView::from(product),
        }
        .into_response(),
        None => {
            tracing::debug!(%product_id, "product not found");
            (StatusCode::NOT_FOUND, ProductNotFoundTemplate { shell }).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href() {
        assert_eq!(category_href("All"), "/products");
        assert_eq!(category_href("Audio"), "/products?category=Audio");
        assert_eq!(category_href("Smart Home"), "/products?category=Smart+Home");
    }
}
