//! Fake completion endpoint for tests.
//!
//! Serves a fixed status and JSON body on a random local port and counts how
//! many requests actually reached it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;

/// A request as seen by the fake upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<Value>,
    call_count: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<RecordedRequest>>>,
}

pub struct MockUpstream {
    url: String,
    state: MockState,
}

impl MockUpstream {
    /// Starts a server that answers every POST with `status` and `body`.
    pub async fn start(status: StatusCode, body: Value) -> Self {
        let state = MockState {
            status,
            body: Arc::new(body),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(handle_completion))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/v1/chat/completions"),
            state,
        }
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Number of requests that reached the server.
    pub fn call_count(&self) -> usize {
        self.state.call_count.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.last_request.lock().unwrap().clone()
    }
}

async fn handle_completion(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.call_count.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.last_request.lock().unwrap() = Some(RecordedRequest {
        authorization,
        body,
    });
    (state.status, Json(state.body.as_ref().clone()))
}
