// src/state.rs
use crate::services::backend_client::BackendClient;

// Estado partilhado: só o cliente do backend, imutável depois do arranque.
// Os dois fluxos não partilham mais nada entre si.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

// Permite extrair o cliente diretamente nos handlers
impl axum::extract::FromRef<AppState> for BackendClient {
    fn from_ref(state: &AppState) -> BackendClient {
        state.backend.clone()
    }
}
