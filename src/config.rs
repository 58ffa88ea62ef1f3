// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, fmt::Display, net::SocketAddr, str::FromStr};
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_UPLOAD_MB: &str = "10";
const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub listen_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (o `.env` já deve ter sido carregado).
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de leitura de chaves.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url: String = try_load(&lookup, "BACKEND_URL", DEFAULT_BACKEND_URL)?;
        let max_upload_mb: usize = try_load(&lookup, "MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)?;

        Ok(Self {
            backend_url: parse_base_url(&backend_url)?,
            listen_addr: try_load(&lookup, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
            max_upload_bytes: upload_limit_bytes(max_upload_mb)?,
        })
    }
}

// Zero rejeitaria todos os uploads; valores enormes não cabem num usize
fn upload_limit_bytes(max_upload_mb: usize) -> AppResult<usize> {
    if max_upload_mb == 0 {
        return Err(AppError::Config("MAX_UPLOAD_MB tem de ser maior que zero".to_string()));
    }
    max_upload_mb
        .checked_mul(BYTES_PER_MB)
        .ok_or_else(|| AppError::Config(format!("MAX_UPLOAD_MB demasiado grande: {max_upload_mb}")))
}

/// Garante a barra final, senão `Url::join` substitui o último segmento do caminho.
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let raw = raw.trim();
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)?;
    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!("BACKEND_URL não pode ser usado como base: {raw}")));
    }
    Ok(url)
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        tracing::info!("{key} não definido, usando o valor por omissão: {default}");
        default.to_string()
    });

    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Valor inválido para {key} ({value}): {e}")))
}
