//! In-process mock of the chat API for integration tests.
//!
//! Every request is recorded so tests can assert on method, path, headers
//! and body. Replies can be switched to a failure for error-path tests.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};
use watchparty_client::{
    domain::{ApiKey, RoomId},
    infrastructure::HttpChatApi,
    ui::ClientConfig,
};

pub const TEST_API_KEY: &str = "test-api-key";

/// A request as received by the mock API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// Canned failure returned instead of the normal reply
#[derive(Debug, Clone)]
pub enum Failure {
    Json { status: u16, body: Value },
    Text { status: u16, body: String },
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    messages: Mutex<Vec<Value>>,
    failure: Mutex<Option<Failure>>,
    get_failure: Mutex<Option<u16>>,
}

pub struct MockApiServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockApiServer {
    /// Start the mock API on an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock API failed");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// HTTP client pointed at this server with the test API key.
    pub fn api(&self) -> HttpChatApi {
        HttpChatApi::new(&self.base_url(), &api_key(), Duration::from_secs(5))
            .expect("Failed to build client")
    }

    pub fn config(&self, room_id: u64) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url(),
            api_key: api_key(),
            room_id: RoomId::new(room_id).unwrap(),
            poll_interval: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(5),
        }
    }

    pub fn seed_messages(&self, bodies: &[&str]) {
        let mut messages = self.state.messages.lock().unwrap();
        for body in bodies {
            let id = messages.len() as i64 + 1;
            messages.push(json!({"id": id, "body": body}));
        }
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.state.failure.lock().unwrap() = Some(failure);
    }

    /// Fail only GET requests with a plain-text error of the given status.
    pub fn fail_gets_with(&self, status: u16) {
        *self.state.get_failure.lock().unwrap() = Some(status);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockApiServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn api_key() -> ApiKey {
    ApiKey::new(TEST_API_KEY.to_string()).unwrap()
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let body_json: Option<Value> = serde_json::from_slice(&body).ok();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        api_key: header(&headers, "x-api-key"),
        content_type: header(&headers, "content-type"),
        body: body_json.clone(),
    });

    if let Some(failure) = state.failure.lock().unwrap().clone() {
        return match failure {
            Failure::Json { status, body } => {
                (StatusCode::from_u16(status).unwrap(), Json(body)).into_response()
            }
            Failure::Text { status, body } => {
                (StatusCode::from_u16(status).unwrap(), body).into_response()
            }
        };
    }

    if method == Method::GET
        && let Some(status) = *state.get_failure.lock().unwrap()
    {
        return (StatusCode::from_u16(status).unwrap(), "Bad Gateway").into_response();
    }

    let is_messages = path.starts_with("/api/messages/");
    if method == Method::GET && is_messages {
        return Json(Value::Array(state.messages.lock().unwrap().clone())).into_response();
    }
    if method != Method::POST {
        return StatusCode::NOT_FOUND.into_response();
    }
    if is_messages {
        let text = body_json
            .as_ref()
            .and_then(|b| b.get("body"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if text.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Message text required."})),
            )
                .into_response();
        }
        let mut messages = state.messages.lock().unwrap();
        let id = messages.len() as i64 + 1;
        messages.push(json!({"id": id, "body": text}));
        return Json(json!({"success": true})).into_response();
    }
    match path.as_str() {
        "/api/room/name" | "/api/user/name" | "/api/user/password" => {
            Json(json!({"success": true})).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
