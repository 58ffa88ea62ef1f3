// src/services/backend_client.rs
use crate::error::{AppError, AppResult, FlowResult};
use url::Url;

pub const UPLOAD_IMAGE_PATH: &str = "upload-image/";
pub const ADMIN_LOGIN_PATH: &str = "admin/login/";

/// Cliente HTTP partilhado por todos os pedidos ao backend de análise.
/// `reqwest::Client` já é um Arc por dentro, por isso clonar é barato.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    // Sem timeout: um pedido pendurado fica à espera da resposta do backend.
    pub fn new(base_url: Url) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self { http, base_url })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve um caminho relativo contra o URL base do backend.
    pub fn endpoint(&self, path: &str) -> FlowResult<Url> {
        Ok(self.base_url.join(path)?)
    }
}
