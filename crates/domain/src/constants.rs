//! API constants
//!
//! Endpoints, credential parameter names and request paths of the Domainr
//! API.

/// User agent sent on every request.
pub const DEFAULT_USER_AGENT: &str = concat!("domainr-rs/", env!("CARGO_PKG_VERSION"));

// Direct access
pub const CLIENT_ID_ENDPOINT: &str = "https://api.domainr.com/";
pub const CLIENT_ID_PARAM: &str = "client_id";

// Access through the Mashape gateway
pub const MASHAPE_ENDPOINT: &str = "https://domainr.p.mashape.com/";
pub const MASHAPE_PARAM: &str = "mashape-key";

// Request paths, relative to the endpoint
pub const ZONES_PATH: &str = "v2/zones";
pub const SEARCH_PATH: &str = "v2/search";
pub const STATUS_PATH: &str = "v2/status";

/// Separator used to batch several domains into one `domain` parameter.
pub const DOMAIN_BATCH_SEPARATOR: &str = ",";
