//! Request and response schemas for the string endpoints
//!
//! Every endpoint gets an explicit serde struct, decoded right after the
//! transport call. Fields absent on the wire fall back through
//! `#[serde(default)]` rather than failing; `ttl` is dropped from request
//! payloads entirely when unset.

use serde::{Deserialize, Serialize};

/// Payload for storing a single string value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRequest {
    /// Value to store
    pub value: String,
    /// Expiration in seconds; omitted from the payload when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Payload for fetching several keys in one round trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGetRequest {
    /// Keys to fetch, in the order results should come back
    pub keys: Vec<String>,
}

/// Payload for storing several values in one round trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSetRequest {
    /// Operations to apply
    pub operations: Vec<SetOperation>,
}

/// One element of a batch set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetOperation {
    /// Key to store under
    pub key: String,
    /// Value to store
    pub value: String,
    /// Expiration in seconds; omitted from the payload when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Response to a single-key GET
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    /// Stored value, `None` when the key does not exist
    #[serde(default)]
    pub value: Option<String>,
}

/// Response to a single-key DELETE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether a key was actually removed; a missing field reads as `false`
    #[serde(default)]
    pub deleted: bool,
}

/// Response to a batch get
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGetResponse {
    /// One entry per requested key, `None` where the key does not exist
    #[serde(default)]
    pub values: Vec<Option<String>>,
}
