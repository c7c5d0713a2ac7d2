//! Shared helpers for integration tests. Every test starts its own mock
//! server; nothing here is process-wide except the tracing subscriber.

#![allow(dead_code)]

use domainr_domain::Authenticator;
use domainr_infra::DomainrClient;
use wiremock::MockServer;

pub const TEST_CLIENT_ID: &str = "client-id";

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("domainr_infra=debug")
        .with_test_writer()
        .try_init();
}

/// Start a fresh mock server for a single test.
pub async fn start_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Client authenticated with [`TEST_CLIENT_ID`], pointed at `server`.
pub fn client_for(server: &MockServer) -> DomainrClient {
    client_with_auth(server, Authenticator::client_id(TEST_CLIENT_ID))
}

pub fn client_with_auth(server: &MockServer, auth: Authenticator) -> DomainrClient {
    DomainrClient::builder()
        .auth(auth)
        .base_url(server.uri())
        .build()
        .expect("client should build")
}
