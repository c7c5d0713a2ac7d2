//! # Domainr Domain
//!
//! Data types shared by every layer of the Domainr client.
//!
//! This crate contains:
//! - Result records decoded from the API (`Domain`, `ZonesResult`, ...)
//! - The `Authenticator` credential/endpoint strategy
//! - Client configuration structures
//! - Error types and the `Result` alias
//!
//! ## Architecture
//! - No dependencies on other Domainr crates
//! - No I/O; serde derives only

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
