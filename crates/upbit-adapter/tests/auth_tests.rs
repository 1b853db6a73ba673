/*
[INPUT]:  Signing scenarios for the request token
[OUTPUT]: Test results for the credential signer
[POS]:    Integration tests - authentication
[UPDATE]: When the token claims or signing scheme change
*/

mod common;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::{TEST_ACCESS_KEY, bearer_jwt, decode_claims, test_credentials};
use sha2::{Digest, Sha512};
use upbit_adapter::{JwtSigner, Params};
use uuid::Uuid;

fn order_params() -> Params {
    let mut params = Params::new();
    params.set("market", "KRW-BTC");
    params.set("side", "bid");
    params.set("volume", "0.0001");
    params.set("price", "80000000");
    params.set("ord_type", "limit");
    params
}

#[test]
fn test_token_verifies_and_carries_query_claims() {
    let signer = JwtSigner::new(test_credentials());
    let params = order_params();

    let header = signer.bearer_token(&params).unwrap();
    let claims = decode_claims(bearer_jwt(&header));

    assert_eq!(claims.access_key, TEST_ACCESS_KEY);
    assert_eq!(claims.query.as_deref(), Some(params.encode().as_str()));
    assert_eq!(claims.query_hash_alg.as_deref(), Some("SHA512"));
    assert!(Uuid::parse_str(&claims.nonce).is_ok());
}

#[test]
fn test_query_hash_is_sha512_of_canonical_encoding() {
    let signer = JwtSigner::new(test_credentials());
    let params = order_params();

    let header = signer.bearer_token(&params).unwrap();
    let claims = decode_claims(bearer_jwt(&header));

    let expected = hex::encode(Sha512::digest(params.encode().as_bytes()));
    assert_eq!(claims.query_hash.as_deref(), Some(expected.as_str()));
}

#[test]
fn test_repeat_signing_rotates_nonce_keeps_hash() {
    let signer = JwtSigner::new(test_credentials());
    let params = order_params();

    let first = decode_claims(bearer_jwt(&signer.bearer_token(&params).unwrap()));
    let second = decode_claims(bearer_jwt(&signer.bearer_token(&params).unwrap()));

    assert_ne!(first.nonce, second.nonce);
    assert_eq!(first.query_hash, second.query_hash);
}

#[test]
fn test_single_parameter_change_changes_hash() {
    let signer = JwtSigner::new(test_credentials());
    let base = order_params();
    let mut tampered = order_params();
    tampered.set("price", "80000001");

    let base = decode_claims(bearer_jwt(&signer.bearer_token(&base).unwrap()));
    let tampered = decode_claims(bearer_jwt(&signer.bearer_token(&tampered).unwrap()));

    assert_ne!(base.query_hash, tampered.query_hash);
}

#[test]
fn test_parameterless_token_has_minimal_claims() {
    let signer = JwtSigner::new(test_credentials());

    let header = signer.bearer_token(&Params::new()).unwrap();
    let claims = decode_claims(bearer_jwt(&header));

    assert_eq!(claims.access_key, TEST_ACCESS_KEY);
    assert!(claims.query.is_none());
    assert!(claims.query_hash.is_none());
    assert!(claims.query_hash_alg.is_none());
}

#[test]
fn test_token_header_declares_hs256() {
    let signer = JwtSigner::new(test_credentials());

    let token = signer.connect_token().unwrap();
    let header_segment = token.split('.').next().expect("JWT header segment");
    let header_bytes = URL_SAFE_NO_PAD.decode(header_segment).unwrap();
    let header: serde_json::Value = serde_json::from_slice(&header_bytes).unwrap();

    assert_eq!(header["alg"], "HS256");
}

#[test]
fn test_connect_token_matches_handshake_contract() {
    let signer = JwtSigner::new(test_credentials());

    let token = signer.connect_token().unwrap();
    let claims = decode_claims(&token);

    assert_eq!(claims.access_key, TEST_ACCESS_KEY);
    assert!(Uuid::parse_str(&claims.nonce).is_ok());
    assert!(claims.query.is_none());
    assert!(claims.query_hash.is_none());
}
