//! String operations on the Redis gateway

use hyper::body::Bytes;
use hyper::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{RequestError, Result};
use crate::transport::Transport;
use crate::types::{
    BatchGetRequest, BatchGetResponse, BatchSetRequest, DeleteResponse, GetResponse, SetOperation,
    SetRequest,
};

/// Characters allowed unencoded in a URI path segment per RFC 3986.
/// `/` stays in the encode set: a key occupies exactly one path segment,
/// and the info sub-path must not be reachable through a key name.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Percent-encode a key for use in a URI path.
fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, PATH_SEGMENT).to_string()
}

fn to_json<T: Serialize>(payload: &T) -> Result<Bytes> {
    let json = serde_json::to_vec(payload)
        .map_err(|e| RequestError::with_source("could not encode request payload", e))?;
    Ok(Bytes::from(json))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| RequestError::with_source("unexpected response shape", e))
}

/// Typed facade over the gateway's string endpoints
///
/// Holds a clone of the shared [`Transport`]; create as many facades as
/// convenient, they all reuse the same configuration and connection pool.
///
/// # Example
/// ```rust,no_run
/// use redis_gateway_client::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), redis_gateway_client::RequestError> {
///     let client = Client::new("http://localhost:8080");
///     let strings = client.string();
///
///     strings.set("greeting", "hello", None).await?;
///     let value = strings.get("greeting").await?;
///     println!("greeting = {:?}", value);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct StringClient {
    transport: Transport,
}

impl StringClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the value stored under `key`
    ///
    /// Returns `None` when the key does not exist or the server answers
    /// with an empty body.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = format!("/redis/string/{}", encode_key(key));
        match self.transport.send(Method::GET, &path, None).await? {
            Some(body) => Ok(decode::<GetResponse>(body)?.value),
            None => Ok(None),
        }
    }

    /// Store `value` under `key`, expiring after `ttl` seconds when given
    ///
    /// Fire-and-forget: the server's response body, if any, is discarded.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use redis_gateway_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), redis_gateway_client::RequestError> {
    /// # let client = Client::new("http://localhost:8080");
    /// // Session token that expires in an hour
    /// client.string().set("session:abc", "user-42", Some(3600)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        let path = format!("/redis/string/{}", encode_key(key));
        let payload = SetRequest {
            value: value.to_string(),
            ttl,
        };
        self.transport
            .send(Method::POST, &path, Some(to_json(&payload)?))
            .await?;
        Ok(())
    }

    /// Remove `key`
    ///
    /// Returns whether a key was actually removed; an empty response body
    /// counts as `false`.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let path = format!("/redis/string/{}", encode_key(key));
        match self.transport.send(Method::DELETE, &path, None).await? {
            Some(body) => Ok(decode::<DeleteResponse>(body)?.deleted),
            None => Ok(false),
        }
    }

    /// Server-side metadata for `key`
    ///
    /// The shape of the returned object is up to the gateway, so it comes
    /// back as raw JSON. `None` when the server answers with an empty body.
    pub async fn info(&self, key: &str) -> Result<Option<Value>> {
        let path = format!("/redis/string/{}/info", encode_key(key));
        self.transport.send(Method::GET, &path, None).await
    }

    /// Fetch several keys in one round trip
    ///
    /// The result has one entry per requested key, in request order, with
    /// `None` for keys that do not exist. An empty response body yields an
    /// empty vec. `keys` is forwarded as-is, empty or not.
    pub async fn batch_get(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        let payload = BatchGetRequest { keys: keys.to_vec() };
        match self
            .transport
            .send(
                Method::POST,
                "/redis/string/batch_get",
                Some(to_json(&payload)?),
            )
            .await?
        {
            Some(body) => Ok(decode::<BatchGetResponse>(body)?.values),
            None => Ok(Vec::new()),
        }
    }

    /// Store several values in one round trip
    ///
    /// Fire-and-forget, like [`set`](Self::set). The batch succeeds or
    /// fails as a whole; there is no per-operation result.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use redis_gateway_client::{Client, SetOperation};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), redis_gateway_client::RequestError> {
    /// # let client = Client::new("http://localhost:8080");
    /// let ops = vec![
    ///     SetOperation { key: "user:1".into(), value: "Alice".into(), ttl: None },
    ///     SetOperation { key: "user:2".into(), value: "Bob".into(), ttl: Some(3600) },
    /// ];
    /// client.string().batch_set(&ops).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn batch_set(&self, operations: &[SetOperation]) -> Result<()> {
        let payload = BatchSetRequest {
            operations: operations.to_vec(),
        };
        self.transport
            .send(
                Method::POST,
                "/redis/string/batch_set",
                Some(to_json(&payload)?),
            )
            .await?;
        Ok(())
    }
}
