//! In-process gateway for exercising the client against real HTTP
//!
//! Binds to an ephemeral port and serves HTTP/1.1 with hyper. Every
//! request is recorded for later assertions. Three behaviors: answer with
//! one canned response, hang (for timeout tests), or act as a real
//! in-memory string store.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as observed by the mock gateway.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("recorded body is not JSON")
    }
}

#[derive(Clone)]
enum Mode {
    Canned { status: u16, body: Vec<u8> },
    Hang,
    Store(Arc<Mutex<HashMap<String, String>>>),
}

pub struct MockGateway {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _server: JoinHandle<()>,
}

impl MockGateway {
    /// Gateway that answers every request with the same status and body.
    pub async fn canned(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::start(Mode::Canned {
            status,
            body: body.into(),
        })
        .await
    }

    /// Gateway that accepts connections but stalls far past any test deadline.
    pub async fn hanging() -> Self {
        Self::start(Mode::Hang).await
    }

    /// Gateway backed by an in-memory map with real string endpoint semantics.
    pub async fn store() -> Self {
        Self::start(Mode::Store(Arc::new(Mutex::new(HashMap::new())))).await
    }

    async fn start(mode: Mode) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock gateway");
        let addr = listener.local_addr().expect("mock gateway local addr");
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        let server = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let mode = mode.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let service =
                        service_fn(move |req| handle(req, mode.clone(), log.clone()));
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            addr,
            requests,
            _server: server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received so far; panics if there is not exactly one.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    req: Request<Incoming>,
    mode: Mode,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect();
    let body = req.into_body().collect().await?.to_bytes().to_vec();

    log.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body: body.clone(),
    });

    let response = match mode {
        Mode::Canned { status, body: canned } => reply(
            StatusCode::from_u16(status).expect("valid canned status"),
            canned,
        ),
        Mode::Hang => {
            tokio::time::sleep(Duration::from_secs(600)).await;
            reply(StatusCode::OK, Vec::new())
        }
        Mode::Store(store) => respond_from_store(&store, &method, &path, &body),
    };
    Ok(response)
}

fn reply(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(body)))
        .expect("build mock response")
}

fn json_reply(value: Value) -> Response<Full<Bytes>> {
    reply(StatusCode::OK, value.to_string().into_bytes())
}

fn respond_from_store(
    store: &Mutex<HashMap<String, String>>,
    method: &str,
    path: &str,
    body: &[u8],
) -> Response<Full<Bytes>> {
    let mut store = store.lock().unwrap();

    match (method, path) {
        ("POST", "/redis/string/batch_get") => {
            let request: Value = serde_json::from_slice(body).expect("batch_get body");
            let values: Vec<Value> = request["keys"]
                .as_array()
                .expect("keys array")
                .iter()
                .map(|key| match store.get(key.as_str().expect("string key")) {
                    Some(value) => json!(value),
                    None => Value::Null,
                })
                .collect();
            json_reply(json!({ "values": values }))
        }
        ("POST", "/redis/string/batch_set") => {
            let request: Value = serde_json::from_slice(body).expect("batch_set body");
            for op in request["operations"].as_array().expect("operations array") {
                store.insert(
                    op["key"].as_str().expect("op key").to_string(),
                    op["value"].as_str().expect("op value").to_string(),
                );
            }
            reply(StatusCode::OK, Vec::new())
        }
        ("GET", _) if path.ends_with("/info") => {
            let key = path
                .strip_prefix("/redis/string/")
                .and_then(|rest| rest.strip_suffix("/info"))
                .expect("info path");
            match store.get(key) {
                Some(value) => json_reply(json!({
                    "key": key,
                    "type": "string",
                    "ttl": -1,
                    "size": value.len(),
                })),
                None => reply(StatusCode::OK, Vec::new()),
            }
        }
        ("GET", _) => {
            let key = key_from_path(path);
            match store.get(&key) {
                Some(value) => json_reply(json!({ "value": value })),
                None => json_reply(json!({ "value": Value::Null })),
            }
        }
        ("POST", _) => {
            let key = key_from_path(path);
            let request: Value = serde_json::from_slice(body).expect("set body");
            store.insert(key, request["value"].as_str().expect("set value").to_string());
            reply(StatusCode::OK, Vec::new())
        }
        ("DELETE", _) => {
            let key = key_from_path(path);
            let deleted = store.remove(&key).is_some();
            json_reply(json!({ "deleted": deleted }))
        }
        _ => reply(StatusCode::NOT_FOUND, Vec::new()),
    }
}

fn key_from_path(path: &str) -> String {
    path.strip_prefix("/redis/string/")
        .expect("string endpoint path")
        .to_string()
}
