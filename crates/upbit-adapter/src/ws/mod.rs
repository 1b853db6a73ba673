/*
[INPUT]:  WebSocket configuration and subscription channels
[OUTPUT]: Real-time market data and private account events
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new channels or changing connection logic
*/

pub mod client;
pub mod message;
pub mod subscription;

pub use client::{PrivateWebSocket, PublicWebSocket};
pub use message::{AssetBalance, MyAssetData, MyOrderData, OrderbookData, TickerData, TradeData};
pub use subscription::{Channel, DEFAULT_FORMAT, Subscription, SubscriptionFrame};
