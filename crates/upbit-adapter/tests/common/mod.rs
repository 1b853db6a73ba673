/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for upbit-adapter tests

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use upbit_adapter::Credentials;
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_ACCESS_KEY: &str = "test-access-key";
#[allow(dead_code)]
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials every test signs with
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY)
}

/// Claims carried by a signed request token
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct TokenClaims {
    pub access_key: String,
    pub nonce: String,
    pub query: Option<String>,
    pub query_hash: Option<String>,
    pub query_hash_alg: Option<String>,
}

/// Verify a token against the test secret and return its claims
#[allow(dead_code)]
pub fn decode_claims(token: &str) -> TokenClaims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET_KEY.as_bytes()),
        &validation,
    )
    .expect("token should verify against the test secret")
    .claims
}

/// Strip the scheme prefix from an `Authorization` header value
#[allow(dead_code)]
pub fn bearer_jwt(header: &str) -> &str {
    header
        .strip_prefix("Bearer ")
        .expect("authorization header must use the Bearer scheme")
}
