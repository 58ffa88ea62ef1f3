// src/web/page_handlers.rs
use crate::{
    error::{AppError, AppResult},
    templates::IndexPage,
};
use askama::Template;
use axum::response::{Html, IntoResponse, Response};

// GET / - página inicial com os dois formulários
pub async fn show_index() -> AppResult<Response> {
    tracing::debug!("GET /: Renderizando página inicial");
    render_page(&IndexPage::new())
}

// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// Renderiza a página; falhas do template viram erro interno.
pub fn render_page(page: &IndexPage) -> AppResult<Response> {
    match page.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template IndexPage: {}", e);
            Err(AppError::Template(e))
        }
    }
}
