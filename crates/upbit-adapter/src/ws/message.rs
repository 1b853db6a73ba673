/*
[INPUT]:  Raw WebSocket frame payloads
[OUTPUT]: Parsed streaming event structs
[POS]:    WebSocket layer - inbound message shapes per channel
[UPDATE]: When adding new channels or the exchange changes payloads
*/

use serde::{Deserialize, Serialize};

use crate::types::OrderbookLevel;

/// Ticker channel event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerData {
    #[serde(rename = "type")]
    pub channel: String,
    pub code: String,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub prev_closing_price: f64,
    pub change: String,
    pub change_price: f64,
    pub signed_change_price: f64,
    pub change_rate: f64,
    pub signed_change_rate: f64,
    pub trade_volume: f64,
    pub acc_trade_volume: f64,
    pub acc_trade_price: f64,
    pub trade_date: String,
    pub trade_time: String,
    pub trade_timestamp: i64,
    #[serde(default)]
    pub stream_type: Option<String>,
}

/// Trade channel event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeData {
    #[serde(rename = "type")]
    pub channel: String,
    pub code: String,
    pub trade_price: f64,
    pub trade_volume: f64,
    pub ask_bid: String,
    pub prev_closing_price: f64,
    pub change: String,
    pub change_price: f64,
    pub trade_date: String,
    pub trade_time: String,
    pub trade_timestamp: i64,
    #[serde(default)]
    pub stream_type: Option<String>,
}

/// Orderbook channel event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookData {
    #[serde(rename = "type")]
    pub channel: String,
    pub code: String,
    pub timestamp: i64,
    pub total_ask_size: f64,
    pub total_bid_size: f64,
    pub orderbook_units: Vec<OrderbookLevel>,
    #[serde(default)]
    pub stream_type: Option<String>,
    #[serde(default)]
    pub level: f64,
}

/// Private order channel event (`myOrder`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyOrderData {
    #[serde(rename = "type")]
    pub channel: String,
    pub code: String,
    pub uuid: String,
    pub ask_bid: String,
    pub order_type: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub avg_price: f64,
    pub state: String,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub remaining_volume: f64,
    #[serde(default)]
    pub executed_volume: f64,
    #[serde(default)]
    pub trades_count: u32,
    pub timestamp: i64,
    #[serde(default)]
    pub stream_type: Option<String>,
}

/// Private asset channel event (`myAsset`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyAssetData {
    #[serde(rename = "type")]
    pub channel: String,
    pub asset_uuid: String,
    pub assets: Vec<AssetBalance>,
    pub asset_timestamp: i64,
    pub timestamp: i64,
    #[serde(default)]
    pub stream_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub currency: String,
    pub balance: f64,
    pub locked: f64,
}
