//! Optional filters for the search endpoint

use serde::{Deserialize, Serialize};

/// Filters sent alongside a search query. Empty fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchOptions {
    /// Two-letter country code used to bias results.
    #[serde(default)]
    pub location: String,
    /// Registrar domain, restricting results to zones it supports.
    #[serde(default)]
    pub registrar: String,
    /// Comma-separated zones always included in results.
    #[serde(default)]
    pub defaults: String,
}

impl SearchOptions {
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn registrar(mut self, registrar: impl Into<String>) -> Self {
        self.registrar = registrar.into();
        self
    }

    pub fn defaults(mut self, defaults: impl Into<String>) -> Self {
        self.defaults = defaults.into();
        self
    }

    /// Non-empty filters as `(name, value)` query pairs, in a stable order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("location", self.location.as_str()),
            ("registrar", self.registrar.as_str()),
            ("defaults", self.defaults.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }
}
