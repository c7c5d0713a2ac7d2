//! Domainr API client
//!
//! Builds authenticated GET requests, sends them through [`HttpClient`] and
//! decodes the responses.
//!
//! # Pipeline
//!
//! - Operation (`zones`, `search`, `status`) plans a relative path
//! - [`DomainrClient::build_request`] resolves it against the endpoint and
//!   appends the credential parameter
//! - [`HttpClient::execute`] sends it once
//! - The response is checked and decoded per [`DecodePolicy`]
//!
//! [`HttpClient`]: crate::http::HttpClient
//! [`HttpClient::execute`]: crate::http::HttpClient::execute

pub mod client;
pub mod response;

pub use client::{DomainrClient, DomainrClientBuilder};
pub use response::{DecodePolicy, Decoded};
