//! Response checking and decoding
//!
//! Status 200 is the only success. Every other status is decoded as an
//! [`ErrorEnvelope`] and reported as `DomainrError::Api`. Successful bodies
//! are handled according to the caller's [`DecodePolicy`].

use std::io::Write;

use domainr_domain::{DomainrError, ErrorEnvelope, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::InfraError;

/// How a successful response body is consumed.
pub enum DecodePolicy<'a> {
    /// Decode the body as JSON into the requested type.
    Json,
    /// Copy the body verbatim into the sink without decoding.
    Raw(&'a mut (dyn Write + Send)),
}

impl std::fmt::Debug for DecodePolicy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("Json"),
            Self::Raw(_) => f.write_str("Raw"),
        }
    }
}

/// Outcome of applying a [`DecodePolicy`].
#[derive(Debug)]
pub enum Decoded<T> {
    Json(T),
    /// Number of bytes copied into the sink.
    Raw(u64),
}

impl<T> Decoded<T> {
    pub fn into_json(self) -> Result<T> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Raw(_) => Err(DomainrError::Decode("body was copied raw, not decoded".into())),
        }
    }

    pub fn into_raw(self) -> Result<u64> {
        match self {
            Self::Raw(written) => Ok(written),
            Self::Json(_) => Err(DomainrError::Decode("body was decoded, not copied".into())),
        }
    }
}

/// Check the status of `response` and consume its body per `policy`.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    policy: DecodePolicy<'_>,
) -> Result<Decoded<T>> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(reject(response).await);
    }

    let body = read_body(response).await?;

    match policy {
        DecodePolicy::Json => {
            let value = serde_json::from_slice(&body)
                .map_err(|err| InfraError::from(err).context("unexpected response body"))?;
            Ok(Decoded::Json(value))
        }
        DecodePolicy::Raw(sink) => {
            sink.write_all(&body).map_err(|err| {
                DomainrError::Decode(format!("failed to copy response body: {err}"))
            })?;
            debug!(bytes = body.len(), "copied raw response body");
            Ok(Decoded::Raw(body.len() as u64))
        }
    }
}

/// Turn a non-200 response into the error its envelope describes.
async fn reject(response: Response) -> DomainrError {
    let http_status = response.status().as_u16();

    let body = match read_body(response).await {
        Ok(body) => body,
        Err(err) => return err,
    };

    match serde_json::from_slice::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            debug!(http_status, status = ?envelope.status, "service rejected request");
            DomainrError::Api { http_status, status: envelope.status, message: envelope.message }
        }
        Err(err) => InfraError::from(err)
            .context(format_args!("undecodable error response (HTTP {http_status})"))
            .into(),
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    let bytes = response.bytes().await.map_err(|err| {
        let infra: InfraError = err.without_url().into();
        DomainrError::from(infra)
    })?;
    Ok(bytes.to_vec())
}
