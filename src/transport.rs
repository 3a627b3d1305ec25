//! HTTP transport for the Redis gateway

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use tracing::debug;

use crate::error::{RequestError, Result};

/// Configuration options for the gateway client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway base URL (default: http://localhost:8080).
    /// A trailing slash is stripped at construction.
    pub base_url: String,
    /// Optional request timeout. `None` means no client-side deadline.
    pub timeout: Option<Duration>,
    /// Static headers attached to every outgoing request.
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: None,
            headers: HashMap::new(),
        }
    }
}

type HttpsConnector = hyper_rustls::HttpsConnector<HttpConnector>;

/// HTTP transport shared by every operation facade
///
/// Owns the resolved configuration and the underlying connection pool.
/// Holds no per-call state, so clones are cheap and concurrent requests
/// over one transport are safe. Supports `http://` and `https://` base
/// URLs; TLS uses standard CA verification against the webpki roots.
#[derive(Clone)]
pub struct Transport {
    config: Arc<ClientConfig>,
    http_client: HttpClient<HttpsConnector, Full<Bytes>>,
}

impl Transport {
    /// Create a transport from the given configuration.
    ///
    /// Never fails: the base URL is not validated here, and a malformed
    /// one surfaces as a [`RequestError`] on the first request, once a
    /// full request URL exists to report.
    pub fn new(mut config: ClientConfig) -> Self {
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        let http_client = HttpClient::builder(TokioExecutor::new()).build(connector);

        Self {
            config: Arc::new(config),
            http_client,
        }
    }

    /// The configured base URL, without its trailing slash
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Send one request and return the parsed JSON response body
    ///
    /// `path` is appended to the base URL as-is. When `body` is present it
    /// is sent with a `content-type: application/json` header, after the
    /// configured static headers. `Ok(None)` means the server answered
    /// with an empty body; any connection failure, elapsed timeout, or
    /// non-success status is a [`RequestError`].
    pub async fn send(&self, method: Method, path: &str, body: Option<Bytes>) -> Result<Option<Value>> {
        let url = format!("{}{}", self.config.base_url, path);
        let uri: Uri = url
            .parse()
            .map_err(|e| RequestError::with_source(format!("invalid request URL {}", url), e))?;

        let mut builder = Request::builder().method(method.clone()).uri(uri);
        for (name, value) in &self.config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }

        let req = builder
            .body(Full::new(body.unwrap_or_default()))
            .map_err(|e| RequestError::with_source("could not build request", e))?;

        debug!("sending {} {}", method, path);

        let round_trip = self.http_client.request(req);
        let response = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, round_trip)
                .await
                .map_err(|_| RequestError::new(format!("timed out after {:?}", timeout)))?,
            None => round_trip.await,
        }
        .map_err(|e| RequestError::with_source("connection error", e))?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| RequestError::with_source("could not read response body", e))?
            .to_bytes();

        if !status.is_success() {
            let body_text = String::from_utf8_lossy(&bytes);
            return Err(RequestError::new(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body_text.trim()
            )));
        }

        if bytes.is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| RequestError::with_source("response body is not valid JSON", e))?;
        Ok(Some(value))
    }
}
