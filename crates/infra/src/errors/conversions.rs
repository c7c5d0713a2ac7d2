//! Conversions from external infrastructure errors into domain errors.

use std::fmt::Display;

use domainr_domain::{DomainrError, TransportError};
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DomainrError);

impl From<InfraError> for DomainrError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl InfraError {
    /// Prefix the message of a URL or decode error with `context`.
    pub(crate) fn context(self, context: impl Display) -> Self {
        let error = match self.0 {
            DomainrError::InvalidUrl(message) => {
                DomainrError::InvalidUrl(format!("{context}: {message}"))
            }
            DomainrError::Decode(message) => DomainrError::Decode(format!("{context}: {message}")),
            other => other,
        };
        InfraError(error)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDomainrError {
    fn into_domainr(self) -> DomainrError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DomainrError */
/* -------------------------------------------------------------------------- */

impl IntoDomainrError for HttpError {
    fn into_domainr(self) -> DomainrError {
        if self.is_timeout() {
            return DomainrError::Timeout(TransportError::from_source(self));
        }

        if self.is_builder() {
            return DomainrError::InvalidUrl(self.to_string());
        }

        if self.is_decode() {
            return DomainrError::Decode(self.to_string());
        }

        // Connection, request and body failures keep the transport's message.
        DomainrError::Network(TransportError::from_source(self))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_domainr())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → DomainrError */
/* -------------------------------------------------------------------------- */

impl IntoDomainrError for UrlError {
    fn into_domainr(self) -> DomainrError {
        DomainrError::InvalidUrl(self.to_string())
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_domainr())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DomainrError */
/* -------------------------------------------------------------------------- */

impl IntoDomainrError for JsonError {
    fn into_domainr(self) -> DomainrError {
        DomainrError::Decode(self.to_string())
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_domainr())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
