use std::sync::Arc;

use axum::{
    Router,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use bytes::Bytes;
use parking_lot::Mutex;
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub headers: HeaderMap,
    pub parts: Vec<ReceivedPart>,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// A `/multipart` endpoint that records every request and answers with a
/// fixed status and body.
pub struct TestServer {
    port: u16,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl TestServer {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            status,
            body,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/multipart", post(multipart_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { port, requests }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/multipart", self.port)
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.requests.lock().clone()
    }

    /// Parts of every request received so far, one list per request.
    pub fn parts(&self) -> Vec<Vec<ReceivedPart>> {
        self.requests
            .lock()
            .iter()
            .map(|request| request.parts.clone())
            .collect()
    }
}

async fn multipart_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, &'static str) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|mime| mime.to_string());
        let data = field.bytes().await.unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }
    state
        .requests
        .lock()
        .push(ReceivedRequest { headers, parts });
    (state.status, state.body)
}

/// A url on a port nothing listens on.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/multipart")
}
