// src/test_support.rs
// Backend falso em processo para os testes: um router axum numa porta efémera.
use crate::{config::parse_base_url, services::backend_client::BackendClient};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::{net::TcpListener, sync::Mutex};

/// Resposta fixa que o backend falso devolve.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: StatusCode::OK, body: body.into() }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// O que chegou ao endpoint de upload.
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub crop_type: Option<String>,
    pub file_name: Option<String>,
    pub file_len: usize,
}

#[derive(Clone)]
struct FakeState {
    upload_reply: Reply,
    login_replies: Arc<Mutex<Vec<Reply>>>,
    upload_hits: Arc<AtomicUsize>,
    login_hits: Arc<AtomicUsize>,
    last_upload: Arc<Mutex<Option<ReceivedUpload>>>,
    last_login: Arc<Mutex<Option<Value>>>,
}

pub struct FakeBackend {
    pub client: BackendClient,
    state: FakeState,
}

impl FakeBackend {
    /// Arranca o backend falso; os logins consomem as respostas por ordem,
    /// repetindo a última quando acabam.
    pub async fn spawn(upload_reply: Reply, login_replies: Vec<Reply>) -> Self {
        let state = FakeState {
            upload_reply,
            login_replies: Arc::new(Mutex::new(login_replies)),
            upload_hits: Arc::default(),
            login_hits: Arc::default(),
            last_upload: Arc::default(),
            last_login: Arc::default(),
        };

        let app = Router::new()
            .route("/upload-image/", post(fake_upload))
            .route("/admin/login/", post(fake_login))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = BackendClient::new(parse_base_url(&format!("http://{addr}")).unwrap()).unwrap();
        Self { client, state }
    }

    pub fn upload_hits(&self) -> usize {
        self.state.upload_hits.load(Ordering::SeqCst)
    }

    pub fn login_hits(&self) -> usize {
        self.state.login_hits.load(Ordering::SeqCst)
    }

    pub async fn last_upload(&self) -> Option<ReceivedUpload> {
        self.state.last_upload.lock().await.clone()
    }

    pub async fn last_login(&self) -> Option<Value> {
        self.state.last_login.lock().await.clone()
    }
}

/// Cliente apontado a uma porta onde ninguém escuta.
pub async fn unreachable_client() -> BackendClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    BackendClient::new(parse_base_url(&format!("http://{addr}")).unwrap()).unwrap()
}

async fn fake_upload(State(state): State<FakeState>, mut multipart: Multipart) -> (StatusCode, String) {
    state.upload_hits.fetch_add(1, Ordering::SeqCst);

    let mut received = ReceivedUpload::default();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("crop_type") => received.crop_type = Some(field.text().await.unwrap()),
            Some("file") => {
                received.file_name = field.file_name().map(str::to_string);
                received.file_len = field.bytes().await.unwrap().len();
            }
            _ => {}
        }
    }
    *state.last_upload.lock().await = Some(received);

    (state.upload_reply.status, state.upload_reply.body.clone())
}

async fn fake_login(State(state): State<FakeState>, Json(body): Json<Value>) -> (StatusCode, String) {
    state.login_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_login.lock().await = Some(body);

    let mut replies = state.login_replies.lock().await;
    let reply = if replies.len() > 1 { replies.remove(0) } else { replies[0].clone() };
    (reply.status, reply.body)
}
