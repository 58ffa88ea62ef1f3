// src/web/admin_handlers.rs
use crate::{
    error::AppResult,
    models::user::AdminLoginForm,
    services::{admin_service, backend_client::BackendClient},
    templates::IndexPage,
    web::page_handlers::render_page,
};
use axum::{
    extract::{Form, State},
    response::Response,
};
use uuid::Uuid;

/// Handler para POST /admin/login - faz login no backend e mostra a lista de utilizadores.
pub async fn handle_admin_login(
    State(backend): State<BackendClient>,
    Form(form): Form<AdminLoginForm>,
) -> AppResult<Response> {
    let submission_id = Uuid::new_v4();
    tracing::info!(%submission_id, "POST /admin/login: Tentativa de login para {}", form.email);

    // A password nunca volta para a página
    let mut page = IndexPage::new().with_admin_email(&form.email);

    let outcome = match admin_service::validate_credentials(&form.email, &form.password) {
        Ok(credentials) => admin_service::fetch_users(&backend, &credentials, submission_id).await,
        Err(e) => {
            tracing::warn!(%submission_id, "Login inválido, nada enviado ao backend: {}", e);
            Err(e)
        }
    };

    match outcome {
        Ok(users) => {
            tracing::info!(%submission_id, "✅ Login de admin aceite, {} utilizadores", users.len());
            page.show_users(&users);
        }
        Err(e) => page.notify(admin_service::notice_for(&e)),
    }

    render_page(&page)
}
