//! Domain lookup port interface

use async_trait::async_trait;
use domainr_domain::{
    Domain, DomainrError, Result, SearchOptions, SearchResult, StatusResult, ZonesResult,
};
use tracing::debug;

/// Operations offered by the Domainr API
///
/// Each call is one stateless request/response exchange.
#[async_trait]
pub trait DomainLookup: Send + Sync {
    /// List the zones the service supports.
    async fn zones(&self) -> Result<ZonesResult>;

    /// Search for domain candidates matching `query`.
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult>;

    /// Check the registration status of one or more domains in a single
    /// request. Records come back in the order the service returns them.
    async fn status(&self, domains: &[&str]) -> Result<StatusResult>;

    /// Status of a single domain: the first record the service returns.
    ///
    /// # Errors
    /// Returns `DomainrError::EmptyResult` when the service returns no
    /// records, in addition to any error from [`DomainLookup::status`].
    async fn single_status(&self, domain: &str) -> Result<Domain> {
        let result = self.status(&[domain]).await?;
        debug!(domain, records = result.domains.len(), "single status lookup");

        result.domains.into_iter().next().ok_or_else(|| {
            DomainrError::EmptyResult(format!("status returned 0 domains for {domain}"))
        })
    }
}
