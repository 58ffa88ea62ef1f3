// src/web/routes.rs
use crate::{
    state::AppState,
    web::{admin_handlers, page_handlers, upload_handlers},
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    // Os dois fluxos são independentes: um handler por formulário
    Router::new()
        .route("/", get(page_handlers::show_index))
        .route("/health", get(page_handlers::health))
        .route(
            "/upload-image",
            post(upload_handlers::handle_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/admin/login", post(admin_handlers::handle_admin_login))
        .with_state(app_state)
}
