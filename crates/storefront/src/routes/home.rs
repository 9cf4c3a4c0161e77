//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::products::ProductView;
use super::shell::ShellView;
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero banner content.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
    pub image_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Premium Products for Modern Living".to_string(),
            subtitle: "Discover our curated collection of high-quality products designed to enhance your life.".to_string(),
            button_text: "Shop Now".to_string(),
            button_url: "/products".to_string(),
            image_url: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=1920&q=80".to_string(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: ShellView,
    /// Hero banner.
    pub hero: HeroConfig,
    /// Products for the "Featured Products" grid.
    pub featured_products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state, shell))]
pub async fn home(State(state): State<AppState>, shell: ShellView) -> impl IntoResponse {
    let featured_products = state
        .catalog()
        .featured()
        .iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        shell,
        hero: HeroConfig::default(),
        featured_products,
    }
}
