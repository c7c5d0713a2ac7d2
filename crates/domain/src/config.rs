//! Client configuration structures

use serde::{Deserialize, Serialize};

use crate::types::Authenticator;

/// Which credential scheme the client authenticates with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    ClientId,
    Mashape,
}

/// Configuration for a Domainr client
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub auth_mode: AuthMode,
    pub credential: String,
    /// Overrides the endpoint implied by `auth_mode`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Transport timeout. No timeout is applied when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn authenticator(&self) -> Authenticator {
        match self.auth_mode {
            AuthMode::ClientId => Authenticator::client_id(self.credential.clone()),
            AuthMode::Mashape => Authenticator::mashape(self.credential.clone()),
        }
    }

    /// Base URL requests resolve against.
    pub fn endpoint(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.authenticator().endpoint().to_string())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_mode", &self.auth_mode)
            .field("credential", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
