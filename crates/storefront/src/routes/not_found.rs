//! Fallback handler for unknown paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::instrument;

use super::shell::ShellView;
use crate::filters;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: ShellView,
}

/// Render the not-found page with a 404 status.
#[instrument(skip(shell), fields(path = %shell.path))]
pub async fn not_found(shell: ShellView) -> impl IntoResponse {
    tracing::debug!("no route matched");
    (StatusCode::NOT_FOUND, NotFoundTemplate { shell })
}
