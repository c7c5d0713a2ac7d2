//! Error types used throughout the client

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Domainr operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DomainrError {
    /// The endpoint and path did not combine into a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[source] TransportError),

    #[error("Request timed out: {0}")]
    Timeout(#[source] TransportError),

    /// The service answered with a non-200 status. Displays as the message
    /// carried by the error envelope.
    #[error("{message}")]
    Api {
        http_status: u16,
        status: Option<String>,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainrError {
    /// HTTP status of a remote rejection, if this error is one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api { http_status, .. } => Some(*http_status),
            _ => None,
        }
    }
}

/// A transport failure: its message plus, when the transport produced one,
/// the original error.
///
/// The original error is reachable through [`TransportError::inner`] or the
/// `source()` chain. Equality and serialization use the message only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TransportError {
    message: String,
    inner: Option<Arc<dyn StdError + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), inner: None }
    }

    /// Wrap `error`, taking its display text as the message.
    pub fn from_source(error: impl StdError + Send + Sync + 'static) -> Self {
        Self { message: error.to_string(), inner: Some(Arc::new(error)) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying transport error, if any. Downcast it to inspect
    /// transport-specific detail.
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.inner.as_deref()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn StdError + 'static))
    }
}

impl PartialEq for TransportError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for TransportError {}

impl From<String> for TransportError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TransportError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<TransportError> for String {
    fn from(error: TransportError) -> Self {
        error.message
    }
}

/// Result type alias for Domainr operations
pub type Result<T> = std::result::Result<T, DomainrError>;
