/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Upbit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{Credentials, JwtSigner};

// Re-export commonly used types from http
pub use http::{ClientConfig, Params, Result, UpbitClient, UpbitError};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    Channel,
    MyAssetData,
    MyOrderData,
    OrderbookData,
    PrivateWebSocket,
    PublicWebSocket,
    Subscription,
    SubscriptionFrame,
    TickerData,
    TradeData,
};
