/*
[INPUT]:  Error sources (HTTP, status, decode, signing, WebSocket)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Upbit adapter
#[derive(Error, Debug)]
pub enum UpbitError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered outside [200, 300); carries the raw body for diagnosis
    #[error("unexpected status code {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected JSON shape
    #[error("decoding response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token signing failed
    #[error("signing request: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// URL parsing failed
    #[error("invalid url: {0}")]
    UrlParse(#[from] url::ParseError),

    /// WebSocket error
    #[error("websocket error: {0}")]
    WebSocket(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl UpbitError {
    /// Check if the error indicates the exchange rejected our credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            UpbitError::Status {
                status: 401 | 403,
                ..
            } | UpbitError::Signing(_)
        )
    }

    /// Check if the error happened below the protocol layer
    pub fn is_transport_error(&self) -> bool {
        matches!(self, UpbitError::Http(_) | UpbitError::WebSocket(_))
    }
}

/// Result type alias for Upbit operations
pub type Result<T> = std::result::Result<T, UpbitError>;
