//! Error type for the Redis gateway client

use std::error::Error as StdError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Error returned when a gateway request fails
///
/// Every failure mode collapses into this one kind: connection errors,
/// elapsed timeouts, non-success HTTP statuses, and request or response
/// bodies that cannot be encoded or decoded. The underlying cause, when
/// there is one, is available through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("request failed: {message}")]
pub struct RequestError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl RequestError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RequestError>;
