//! Local HTTP stand-ins for the upstream APIs, served on an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};

/// One request as the stub received it.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ReceivedRequest {
    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Handle to a running stub server.
pub struct StubServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl StubServer {
    /// Answers every request with `status` and a JSON `body`, recording what arrived.
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            body: body.to_string(),
            received: received.clone(),
        };
        let app = Router::new().fallback(respond).with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn respond(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    stub.received.lock().unwrap().push(ReceivedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
        .into_response()
}
