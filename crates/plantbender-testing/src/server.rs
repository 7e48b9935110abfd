//! Local HTTP stand-in for the Azure Functions backend.
//!
//! Serves `GET /api/HttpTrigger1` and `POST /api/HttpTrigger2` on an ephemeral
//! port. The server runs on its own thread and runtime so it can back both
//! `#[tokio::test]` tests and blocking CLI tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use plantbender_client::ApiConfig;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::fixtures::{ACTIVATION_CODE, RECORDS_CODE};

/// One POST received by the activation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedActivation {
    pub code: Option<String>,
    pub body: String,
    pub content_type: Option<String>,
}

struct ServerState {
    records_status: AtomicU16,
    records_body: Mutex<String>,
    records_hits: AtomicUsize,
    activation_status: AtomicU16,
    activations: Mutex<Vec<ReceivedActivation>>,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            records_status: AtomicU16::new(200),
            records_body: Mutex::new("[]".to_string()),
            records_hits: AtomicUsize::new(0),
            activation_status: AtomicU16::new(200),
            activations: Mutex::new(Vec::new()),
        }
    }
}

pub struct MockServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockServer {
    /// Bind to `127.0.0.1:0` and start serving.
    pub fn start() -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
        listener
            .set_nonblocking(true)
            .expect("Failed to set mock listener non-blocking");
        let addr = listener.local_addr().expect("Failed to read mock address");

        let state = Arc::new(ServerState::default());
        let app = router(state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        std::thread::Builder::new()
            .name("mock-backend".into())
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to build mock server runtime");

                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::from_std(listener)
                        .expect("Failed to adopt mock listener");
                    let _ = axum::serve(listener, app)
                        .with_graceful_shutdown(async {
                            let _ = shutdown_rx.await;
                        })
                        .await;
                });
            })
            .expect("Failed to spawn mock server thread");

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Start with a records payload already installed.
    pub fn with_records(records: Value) -> Self {
        let server = Self::start();
        server.set_records(&records);
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/", self.addr)
    }

    /// Client settings pointing at this server with the expected codes.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url(), RECORDS_CODE, ACTIVATION_CODE)
            .with_timeout(Duration::from_secs(5))
    }

    pub fn set_records(&self, records: &Value) {
        self.set_records_body(records.to_string());
    }

    /// Install a raw body, e.g. to serve a malformed payload.
    pub fn set_records_body(&self, body: impl Into<String>) {
        *self.state.records_body.lock().unwrap() = body.into();
        self.state.records_status.store(200, Ordering::SeqCst);
    }

    pub fn fail_records(&self, status: u16) {
        self.state.records_status.store(status, Ordering::SeqCst);
    }

    pub fn fail_activations(&self, status: u16) {
        self.state.activation_status.store(status, Ordering::SeqCst);
    }

    pub fn records_hits(&self) -> usize {
        self.state.records_hits.load(Ordering::SeqCst)
    }

    pub fn activations(&self) -> Vec<ReceivedActivation> {
        self.state.activations.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{}/api/", addr)
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/HttpTrigger1", get(records))
        .route("/api/HttpTrigger2", post(activation))
        .with_state(state)
}

async fn records(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.records_hits.fetch_add(1, Ordering::SeqCst);

    if query.get("code").map(String::as_str) != Some(RECORDS_CODE) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let status = StatusCode::from_u16(state.records_status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if !status.is_success() {
        return status.into_response();
    }

    let body = state.records_body.lock().unwrap().clone();
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn activation(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let code = query.get("code").cloned();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.activations.lock().unwrap().push(ReceivedActivation {
        code: code.clone(),
        body,
        content_type,
    });

    if code.as_deref() != Some(ACTIVATION_CODE) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    StatusCode::from_u16(state.activation_status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
