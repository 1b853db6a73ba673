/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod params;
pub mod public;
pub mod trade;
pub mod user;

pub use client::{ClientConfig, UpbitClient};
pub use error::{Result, UpbitError};
pub use params::Params;
