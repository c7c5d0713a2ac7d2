use std::time::Duration;

use domainr_domain::constants::DEFAULT_USER_AGENT;
use domainr_domain::DomainrError;
use reqwest::{Client as ReqwestClient, Method, Request, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP transport used by the Domainr client.
///
/// Every request is sent exactly once. Timeouts, proxies and TLS settings
/// belong to the wrapped `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, DomainrError> {
        Self::builder().build()
    }

    /// Wrap an existing `reqwest` client, keeping its configuration.
    pub fn from_reqwest(client: ReqwestClient) -> Self {
        Self { client }
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send a built request once.
    ///
    /// Transport failures are returned as `Network` or `Timeout` errors and
    /// are not retried. Any HTTP status, including errors, is returned as a
    /// response.
    pub async fn execute(&self, request: Request) -> Result<Response, DomainrError> {
        let method = request.method().clone();
        // The query string carries the credential, so only the path is logged.
        let path = request.url().path().to_string();
        debug!(%method, %path, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %path, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                let err = err.without_url();
                debug!(%method, %path, error = %err, "HTTP request failed");
                let infra: InfraError = err.into();
                Err(DomainrError::from(infra))
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Total time allowed per request. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpClient, DomainrError> {
        let mut builder = ReqwestClient::builder().user_agent(DEFAULT_USER_AGENT);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            DomainrError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
