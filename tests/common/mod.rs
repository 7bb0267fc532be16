//! In-process stand-in for the prediction service

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// A request received by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, (StatusCode, String)>>,
    delays: Mutex<HashMap<String, Duration>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Start a backend answering 404 to every path until routes are set
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer `path` with `status` and a raw body
    pub fn respond(&self, path: &str, status: StatusCode, body: &str) {
        self.state.routes.lock().insert(path.to_string(), (status, body.to_string()));
    }

    /// Hold responses for `path` back by `delay`
    pub fn delay(&self, path: &str, delay: Duration) {
        self.state.delays.lock().insert(path.to_string(), delay);
    }

    pub fn respond_json(&self, path: &str, body: serde_json::Value) {
        self.respond(path, StatusCode::OK, &body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let delay = state.delays.lock().get(uri.path()).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let route = state.routes.lock().get(uri.path()).cloned();
    match route {
        Some((status, body)) => (status, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Address nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
