//! Client entry point wiring operation facades to a shared transport

use crate::string::StringClient;
use crate::transport::{ClientConfig, Transport};

/// Entry point for the Redis gateway API
///
/// Owns a [`Transport`] shared by every operation facade. Construction
/// never fails; a malformed base URL surfaces as a
/// [`RequestError`](crate::RequestError) on the first request.
///
/// # Example
/// ```rust,no_run
/// use redis_gateway_client::{Client, ClientConfig};
/// use std::collections::HashMap;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), redis_gateway_client::RequestError> {
///     // Defaults: no timeout, no extra headers
///     let client = Client::new("http://localhost:8080");
///
///     // Custom timeout and a static auth header on every request
///     let mut headers = HashMap::new();
///     headers.insert("authorization".to_string(), "Bearer my-token".to_string());
///     let client = Client::with_config(ClientConfig {
///         base_url: "https://kv.example.com".to_string(),
///         timeout: Some(Duration::from_secs(10)),
///         headers,
///     });
///
///     let value = client.string().get("greeting").await?;
///     println!("greeting = {:?}", value);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client for the given base URL with default options.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// String operations on the gateway.
    pub fn string(&self) -> StringClient {
        StringClient::new(self.transport.clone())
    }

    /// The configured base URL, without its trailing slash.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}
