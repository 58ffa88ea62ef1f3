// src/error.rs
use axum::{extract::multipart::MultipartError, http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

/// Erros da aplicação web em si (arranque, renderização, pedidos do browser inválidos).
/// Os erros de cada fluxo ficam em `FlowError` e nunca chegam aqui.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("URL inválido: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Erro ao criar cliente HTTP: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Erro ao ler o formulário multipart: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Erro ao renderizar template: {0}")]
    Template(#[from] askama::Error),
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match self {
            AppError::Multipart(_) => (StatusCode::BAD_REQUEST, "The submitted form could not be read."),
            AppError::Config(_) | AppError::InvalidUrl(_) | AppError::HttpClient(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "The application is misconfigured.")
            }
            AppError::Template(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Error</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Error {status_code}</h1><p>{message}</p><a href="/">Back</a></body></html>
         "#, status_code=status.as_u16(), message=user_message))).into_response()
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

/// Falha terminal de uma submissão (upload ou login de admin).
/// Nenhuma é repetida; o handler converte-a num aviso na página.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Campo obrigatório em falta: o backend nunca é contactado.
    #[error("{0}")]
    Validation(&'static str),

    /// 2xx com um corpo JSON que não tem a forma esperada.
    #[error("Resposta com formato inesperado: {0}")]
    MalformedResponse(String),

    #[error("Backend respondeu {status}: {body}")]
    Rejected { status: reqwest::StatusCode, body: String },

    #[error("Falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Corpo da resposta não é JSON válido: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Endpoint inválido: {0}")]
    Endpoint(#[from] url::ParseError),
}

pub type FlowResult<T> = Result<T, FlowError>;
