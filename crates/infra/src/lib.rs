//! # Domainr Infrastructure
//!
//! HTTP implementation of the `domainr-core` lookup port.
//!
//! This crate contains:
//! - The `reqwest`-backed transport wrapper
//! - Request building, execution and response decoding
//! - The [`DomainrClient`] implementing `DomainLookup`
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Depends on `domainr-domain` and `domainr-core`
//! - Contains all I/O

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{DecodePolicy, DomainrClient, DomainrClientBuilder};
pub use domainr_core::DomainLookup;
pub use http::{HttpClient, HttpClientBuilder};
