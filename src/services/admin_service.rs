// src/services/admin_service.rs
use crate::{
    error::{FlowError, FlowResult},
    models::user::{AdminCredentials, UserRecord},
    services::backend_client::{BackendClient, ADMIN_LOGIN_PATH},
};
use uuid::Uuid;

pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";
pub const LOGIN_REJECTED: &str = "Login failed. Please check your credentials.";
pub const LOGIN_FAILED: &str = "An error occurred while logging in.";

/// Valida o `adminLoginForm`; campos vazios nunca chegam ao backend.
pub fn validate_credentials(email: &str, password: &str) -> FlowResult<AdminCredentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FlowError::Validation(MISSING_CREDENTIALS));
    }
    Ok(AdminCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Faz login como admin e devolve a lista de utilizadores pela ordem do backend.
/// Nenhum token é guardado: cada login é um pedido isolado.
pub async fn fetch_users(
    client: &BackendClient,
    credentials: &AdminCredentials,
    submission_id: Uuid,
) -> FlowResult<Vec<UserRecord>> {
    let url = client.endpoint(ADMIN_LOGIN_PATH)?;
    tracing::info!(%submission_id, email = %credentials.email, "Login de admin: {}", url);

    let response = client.http().post(url).json(credentials).send().await?;
    let status = response.status();

    if !status.is_success() {
        // Sem contrato para o corpo de erro; só fica no log
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%submission_id, "Login de admin recusado ({}): {}", status, body);
        return Err(FlowError::Rejected { status, body });
    }

    let body = response.bytes().await?;
    let users: Vec<UserRecord> = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(%submission_id, "Lista de utilizadores ilegível: {}", e);
        FlowError::Decode(e)
    })?;

    tracing::debug!(%submission_id, "{} utilizadores recebidos", users.len());
    Ok(users)
}

/// Mensagem mostrada ao utilizador para cada falha do login de admin.
pub fn notice_for(error: &FlowError) -> String {
    match error {
        FlowError::Validation(message) => message.to_string(),
        FlowError::Rejected { .. } => LOGIN_REJECTED.to_string(),
        FlowError::MalformedResponse(_) | FlowError::Transport(_) | FlowError::Decode(_) | FlowError::Endpoint(_) => {
            LOGIN_FAILED.to_string()
        }
    }
}
