//! Stub SOAP endpoint for integration tests.
//!
//! Runs an axum server on an OS-assigned port, on its own background
//! thread, and hands every incoming POST to a caller-supplied closure. The
//! closure sees the request path, headers and body and returns the canned
//! reply, which makes golden scenarios, fault bodies, empty responses and
//! header assertions straightforward from blocking test code.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, mpsc};
use std::thread;

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// What the stub saw on the wire.
#[derive(Debug, Clone)]
pub struct StubRequest {
    pub path: String,
    /// Header names lowercased
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl StubRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(|v| v.as_str())
    }
}

/// Canned reply returned by the handler.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    /// 200 with an XML body
    pub fn xml(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// 200 with a zero-length body
    pub fn empty() -> Self {
        Self {
            status: 200,
            body: String::new(),
        }
    }

    /// Same body, different HTTP status (SOAP faults usually ride on 500)
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

type SharedHandler = Arc<dyn Fn(StubRequest) -> StubResponse + Send + Sync>;

pub struct StubSoapServer {
    addr: SocketAddr,
}

impl StubSoapServer {
    /// Spawn the stub on a background thread and wait until it is bound.
    ///
    /// The thread is detached; it lives until the test process exits.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(StubRequest) -> StubResponse + Send + Sync + 'static,
    {
        let handler: SharedHandler = Arc::new(handler);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("failed to bind stub listener");
                let addr = listener.local_addr().expect("stub listener has no addr");
                tx.send(addr).expect("stub startup channel closed");
                axum::serve(listener, app(handler))
                    .await
                    .expect("stub server stopped");
            });
        });

        let addr = rx.recv().expect("stub server failed to start");
        Self { addr }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Endpoint URL to hand to the client under test.
    pub fn url(&self) -> String {
        format!("http://{}/soap", self.addr)
    }
}

pub fn app(handler: SharedHandler) -> Router {
    Router::new().fallback(dispatch).with_state(handler)
}

async fn dispatch(State(handler): State<SharedHandler>, request: Request) -> impl IntoResponse {
    let (parts, body) = request.into_parts();

    let mut headers = HashMap::new();
    for (name, value) in &parts.headers {
        headers.insert(
            name.as_str().to_ascii_lowercase(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let stub_request = StubRequest {
        path: parts.uri.path().to_string(),
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    };

    let reply = handler(stub_request);
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(header::CONTENT_TYPE, r#"text/xml; charset="utf-8""#)],
        reply.body,
    )
}
