//! Request path planning
//!
//! Each operation resolves to a relative path, including its query string.
//! Credentials are not part of these paths; the request builder appends
//! them.

use domainr_domain::constants::{DOMAIN_BATCH_SEPARATOR, SEARCH_PATH, STATUS_PATH, ZONES_PATH};
use domainr_domain::{DomainrError, Result, SearchOptions};
use url::form_urlencoded;

/// Path of the zones listing.
pub fn zones_path() -> String {
    ZONES_PATH.to_string()
}

/// Path of a search for `query`, with the non-empty `options` appended.
///
/// # Errors
/// Returns `DomainrError::InvalidInput` if `query` is empty. Any other
/// query, whitespace included, is sent as given.
pub fn search_path(query: &str, options: &SearchOptions) -> Result<String> {
    if query.is_empty() {
        return Err(DomainrError::InvalidInput("search query must not be empty".into()));
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("query", query);
    for (name, value) in options.query_pairs() {
        serializer.append_pair(name, value);
    }

    Ok(format!("{SEARCH_PATH}?{}", serializer.finish()))
}

/// Path of a status check for every domain in `domains`, batched into one
/// comma-separated `domain` parameter in the given order.
///
/// # Errors
/// Returns `DomainrError::InvalidInput` if `domains` is empty.
pub fn status_path<S: AsRef<str>>(domains: &[S]) -> Result<String> {
    if domains.is_empty() {
        return Err(DomainrError::InvalidInput("status requires at least one domain".into()));
    }

    let batch = domains
        .iter()
        .map(|domain| domain.as_ref())
        .collect::<Vec<&str>>()
        .join(DOMAIN_BATCH_SEPARATOR);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("domain", &batch)
        .finish();

    Ok(format!("{STATUS_PATH}?{query}"))
}
