//! Domainr API client
//!
//! Implements [`DomainLookup`] over HTTP. Every request is a GET with the
//! credential in its query string; no request is retried.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use domainr_core::{paths, DomainLookup};
use domainr_domain::constants::DEFAULT_USER_AGENT;
use domainr_domain::{
    Authenticator, ClientConfig, DomainrError, Result, SearchOptions, SearchResult, StatusResult,
    ZonesResult,
};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Method, Request};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, instrument};
use url::Url;

use super::response::{self, DecodePolicy, Decoded};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the Domainr API
#[derive(Clone, Debug)]
pub struct DomainrClient {
    http_client: HttpClient,
    auth: Authenticator,
    base_url: String,
}

impl DomainrClient {
    /// Create a client for `auth` with a default transport, targeting the
    /// authenticator's endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be created
    pub fn new(auth: Authenticator) -> Result<Self> {
        Self::builder().auth(auth).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DomainrClientBuilder {
        DomainrClientBuilder::default()
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be created
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder().auth(config.authenticator());

        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Base URL relative paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the GET request for a relative `path`.
    ///
    /// The path may carry its own query string; the credential parameter is
    /// appended after any parameters already present.
    ///
    /// # Errors
    ///
    /// Returns `DomainrError::InvalidUrl` if the endpoint and path do not
    /// form a valid URL
    pub fn build_request(&self, path: &str) -> Result<Request> {
        let url = self.resolve(path)?;

        self.http_client
            .request(Method::GET, url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| {
                let infra: InfraError = err.without_url().into();
                DomainrError::from(infra)
            })
    }

    /// Send `request` and consume the response per `policy`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-200 responses and bodies that do not decode
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        policy: DecodePolicy<'_>,
    ) -> Result<Decoded<T>> {
        let response = self.http_client.execute(request).await?;
        response::decode(response, policy).await
    }

    /// GET `path` and decode the JSON body into `T`.
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build_request(path)?;
        let decoded = self.execute(request, DecodePolicy::Json).await?;
        debug!("GET request successful");
        decoded.into_json()
    }

    /// GET `path` and copy the body verbatim into `sink`, returning the
    /// number of bytes written.
    #[instrument(skip(self, sink))]
    pub async fn get_raw<W: Write + Send>(&self, path: &str, sink: &mut W) -> Result<u64> {
        let request = self.build_request(path)?;
        self.execute::<IgnoredAny>(request, DecodePolicy::Raw(sink)).await?.into_raw()
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        let joined =
            format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));

        let mut url = Url::parse(&joined).map_err(|err| InfraError::from(err).context(&joined))?;
        if url.cannot_be_a_base() {
            return Err(DomainrError::InvalidUrl(format!("{joined}: not a hierarchical URL")));
        }

        let (name, value) = self.auth.param();
        url.query_pairs_mut().append_pair(name, value);

        Ok(url)
    }
}

#[async_trait]
impl DomainLookup for DomainrClient {
    #[instrument(skip(self))]
    async fn zones(&self) -> Result<ZonesResult> {
        self.get_json(&paths::zones_path()).await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        let path = paths::search_path(query, options)?;
        self.get_json(&path).await
    }

    #[instrument(skip(self))]
    async fn status(&self, domains: &[&str]) -> Result<StatusResult> {
        let path = paths::status_path(domains)?;
        self.get_json(&path).await
    }
}

/// Builder for [`DomainrClient`]
#[derive(Default)]
pub struct DomainrClientBuilder {
    auth: Option<Authenticator>,
    base_url: Option<String>,
    http_client: Option<HttpClient>,
    timeout: Option<Duration>,
}

impl DomainrClientBuilder {
    /// Set the credential strategy
    pub fn auth(mut self, auth: Authenticator) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Override the endpoint implied by the authenticator (e.g. a mock
    /// server in tests)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use an existing transport instead of building one
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Timeout for the transport built by this builder. Ignored when a
    /// transport is supplied with [`Self::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns error if no authenticator is set or the transport cannot be
    /// created
    pub fn build(self) -> Result<DomainrClient> {
        let auth = self
            .auth
            .ok_or_else(|| DomainrError::Config("Authenticator not set".to_string()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let base_url = self.base_url.unwrap_or_else(|| auth.endpoint().to_string());

        Ok(DomainrClient { http_client, auth, base_url })
    }
}
