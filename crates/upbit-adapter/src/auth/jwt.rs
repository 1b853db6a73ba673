/*
[INPUT]:  API key pair and request parameters
[OUTPUT]: Signed bearer tokens for REST and WebSocket authentication
[POS]:    Auth layer - per-request credential signing
[UPDATE]: When the exchange changes its token claims or signing algorithm
*/

use std::fmt;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use sha2::{Digest, Sha512};
use uuid::Uuid;

use crate::http::{Params, Result};

const QUERY_HASH_ALG: &str = "SHA512";

/// Upbit API key pair.
///
/// Owned by exactly one signer or socket session. The secret never leaves the
/// signing routine; `Debug` hides it and the type is deliberately not
/// serializable.
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

/// Claims signed into every token.
///
/// The query claims are present only when the request carries parameters;
/// a parameterless request signs the minimal `access_key` + `nonce` set.
#[derive(Serialize)]
struct Claims<'a> {
    access_key: &'a str,
    nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_hash_alg: Option<&'static str>,
}

/// Signs request credentials for the authenticated REST client and the
/// private WebSocket handshake.
pub struct JwtSigner {
    credentials: Credentials,
    encoding_key: EncodingKey,
}

impl JwtSigner {
    pub fn new(credentials: Credentials) -> Self {
        let encoding_key = EncodingKey::from_secret(credentials.secret_key.as_bytes());
        Self {
            credentials,
            encoding_key,
        }
    }

    /// Produce the `Authorization` header value for one request.
    ///
    /// The token binds the exact canonical encoding of `params`: the digest is
    /// computed over the same string the dispatcher transmits, so re-encoding
    /// with different ordering or escaping would invalidate the signature.
    pub fn bearer_token(&self, params: &Params) -> Result<String> {
        Ok(format!("Bearer {}", self.sign_query(&params.encode())?))
    }

    /// Token for the private WebSocket handshake: `access_key` + `nonce` only,
    /// since the connection request carries no HTTP-style parameters.
    pub fn connect_token(&self) -> Result<String> {
        self.sign_query("")
    }

    fn sign_query(&self, query: &str) -> Result<String> {
        let claims = if query.is_empty() {
            Claims {
                access_key: &self.credentials.access_key,
                nonce: Uuid::new_v4().to_string(),
                query: None,
                query_hash: None,
                query_hash_alg: None,
            }
        } else {
            Claims {
                access_key: &self.credentials.access_key,
                nonce: Uuid::new_v4().to_string(),
                query: Some(query),
                query_hash: Some(query_hash(query)),
                query_hash_alg: Some(QUERY_HASH_ALG),
            }
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }
}

impl fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSigner")
            .field("access_key", &self.credentials.access_key)
            .finish_non_exhaustive()
    }
}

fn query_hash(query: &str) -> String {
    hex::encode(Sha512::digest(query.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jsonwebtoken::{DecodingKey, Validation, decode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TokenClaims {
        access_key: String,
        nonce: String,
        query: Option<String>,
        query_hash: Option<String>,
        query_hash_alg: Option<String>,
    }

    fn test_signer() -> JwtSigner {
        JwtSigner::new(Credentials::new("test-access-key", "test-secret-key"))
    }

    fn decode_claims(token: &str, secret: &str) -> TokenClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .expect("token should verify against the signing secret")
        .claims
    }

    fn order_params() -> Params {
        let mut params = Params::new();
        params.set("market", "KRW-BTC");
        params.set("side", "bid");
        params.set("volume", "0.01");
        params
    }

    #[test]
    fn test_bearer_token_has_prefix_and_verifies() {
        let token = test_signer().bearer_token(&order_params()).unwrap();
        let jwt = token.strip_prefix("Bearer ").expect("Bearer prefix");

        let claims = decode_claims(jwt, "test-secret-key");
        assert_eq!(claims.access_key, "test-access-key");
        assert_eq!(claims.query_hash_alg.as_deref(), Some("SHA512"));
    }

    #[test]
    fn test_query_hash_matches_independent_digest() {
        let params = order_params();
        let token = test_signer().bearer_token(&params).unwrap();
        let claims = decode_claims(token.strip_prefix("Bearer ").unwrap(), "test-secret-key");

        let encoded = params.encode();
        assert_eq!(claims.query.as_deref(), Some(encoded.as_str()));

        let expected = hex::encode(Sha512::digest(encoded.as_bytes()));
        assert_eq!(claims.query_hash.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_same_params_fresh_nonce_same_hash() {
        let signer = test_signer();
        let params = order_params();

        let first = signer.bearer_token(&params).unwrap();
        let second = signer.bearer_token(&params).unwrap();
        let first = decode_claims(first.strip_prefix("Bearer ").unwrap(), "test-secret-key");
        let second = decode_claims(second.strip_prefix("Bearer ").unwrap(), "test-secret-key");

        assert_ne!(first.nonce, second.nonce);
        assert_eq!(first.query_hash, second.query_hash);
    }

    #[test]
    fn test_changed_param_changes_hash() {
        let signer = test_signer();
        let base = order_params();
        let mut tampered = order_params();
        tampered.set("volume", "0.02");

        let base = signer.bearer_token(&base).unwrap();
        let tampered = signer.bearer_token(&tampered).unwrap();
        let base = decode_claims(base.strip_prefix("Bearer ").unwrap(), "test-secret-key");
        let tampered = decode_claims(tampered.strip_prefix("Bearer ").unwrap(), "test-secret-key");

        assert_ne!(base.query_hash, tampered.query_hash);
    }

    #[test]
    fn test_empty_params_omit_query_claims() {
        let token = test_signer().bearer_token(&Params::new()).unwrap();
        let claims = decode_claims(token.strip_prefix("Bearer ").unwrap(), "test-secret-key");

        assert_eq!(claims.access_key, "test-access-key");
        assert!(!claims.nonce.is_empty());
        assert!(claims.query.is_none());
        assert!(claims.query_hash.is_none());
        assert!(claims.query_hash_alg.is_none());
    }

    #[test]
    fn test_connect_token_is_minimal_claim_set() {
        let token = test_signer().connect_token().unwrap();
        let claims = decode_claims(&token, "test-secret-key");

        assert_eq!(claims.access_key, "test-access-key");
        assert!(claims.query.is_none());
        assert!(claims.query_hash.is_none());
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let credentials = Credentials::new("ak", "very-secret");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("ak"));
        assert!(!rendered.contains("very-secret"));
    }
}
