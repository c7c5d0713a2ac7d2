//! Domain types and models

pub mod auth;
pub mod lookup;
pub mod search;

pub use auth::Authenticator;
pub use lookup::{Domain, ErrorEnvelope, SearchResult, StatusResult, ZonesResult};
pub use search::SearchOptions;
