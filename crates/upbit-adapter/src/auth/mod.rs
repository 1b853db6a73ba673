/*
[INPUT]:  API key pair and signing requirements
[OUTPUT]: Bearer tokens for REST requests and WebSocket handshakes
[POS]:    Auth layer - handles Upbit API authentication
[UPDATE]: When the token claims or signing scheme change
*/

pub mod jwt;

pub use jwt::{Credentials, JwtSigner};
