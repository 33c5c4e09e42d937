// ABOUTME: Local HTTP/1 server that serves the in-memory registry over TCP.
// ABOUTME: Exercises the real reqwest client and the compiled binary end to end.

use super::registry::{Registry, RequestHeaders};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use parking_lot::{Mutex, MutexGuard};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct MockGitHub {
    addr: SocketAddr,
    registry: Arc<Mutex<Registry>>,
}

impl MockGitHub {
    /// Bind to an ephemeral port and serve `registry` until the runtime shuts down.
    pub async fn start(registry: Registry) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");
        let registry = Arc::new(Mutex::new(registry));

        let shared = registry.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let registry = shared.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let registry = registry.clone();
                        async move { Ok::<_, Infallible>(respond(&registry, &req)) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, registry }
    }

    /// API root to hand to the client, e.g. `http://127.0.0.1:41234`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock()
    }
}

fn respond(registry: &Mutex<Registry>, req: &Request<Incoming>) -> Response<Full<Bytes>> {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let headers = RequestHeaders {
        authorization: header("authorization"),
        accept: header("accept"),
        user_agent: header("user-agent"),
        api_version: header("x-github-api-version"),
    };

    let (status, body) = registry
        .lock()
        .handle_with(req.method().as_str(), &target, headers);

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}
