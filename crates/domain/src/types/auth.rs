//! Credential strategies
//!
//! Domainr can be reached directly with a `client_id`, or through the
//! Mashape gateway with a `mashape-key`. Both put the credential in a single
//! query parameter; they differ only in the parameter name and the endpoint.

use std::fmt;

use crate::constants::{CLIENT_ID_ENDPOINT, CLIENT_ID_PARAM, MASHAPE_ENDPOINT, MASHAPE_PARAM};

/// Credential and endpoint used to reach the API.
///
/// The credential value is never validated locally. An empty or wrong
/// value is sent as-is and surfaces as a rejection from the service.
#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    /// Gateway access, authenticated with a Mashape key.
    Mashape { key: String },
    /// Direct access, authenticated with a Domainr client ID.
    ClientId { client_id: String },
}

impl Authenticator {
    pub fn mashape(key: impl Into<String>) -> Self {
        Self::Mashape { key: key.into() }
    }

    pub fn client_id(client_id: impl Into<String>) -> Self {
        Self::ClientId { client_id: client_id.into() }
    }

    /// Query parameter `(name, value)` carrying the credential.
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            Self::Mashape { key } => (MASHAPE_PARAM, key),
            Self::ClientId { client_id } => (CLIENT_ID_PARAM, client_id),
        }
    }

    /// Base URL requests are resolved against.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Mashape { .. } => MASHAPE_ENDPOINT,
            Self::ClientId { .. } => CLIENT_ID_ENDPOINT,
        }
    }
}

// Keeps credentials out of logs and panic messages.
impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, _) = self.param();
        f.debug_struct("Authenticator")
            .field("param", &name)
            .field("endpoint", &self.endpoint())
            .field("credential", &"<redacted>")
            .finish()
    }
}
