//! # Domainr Core
//!
//! Transport-free logic of the Domainr client.
//!
//! This crate contains:
//! - The [`DomainLookup`] port implemented by concrete clients
//! - Request path planning for each API operation
//!
//! ## Architecture Principles
//! - Only depends on `domainr-domain`
//! - No HTTP code; transports live in `domainr-infra`

pub mod lookup_ports;
pub mod paths;

pub use lookup_ports::DomainLookup;
