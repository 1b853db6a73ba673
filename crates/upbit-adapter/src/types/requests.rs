/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CandleInterval, OrdType, OrderBy, OrderSide, OrderState, TimeInForce};

/// New order parameters.
///
/// `volume` and `price` are optional because market-style orders carry only
/// one of the two (`price` for a bid by total spend, `volume` for an ask).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub market: String,
    pub side: OrderSide,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub ord_type: OrdType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

/// Cancellation target: order uuid or the caller-supplied identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Lookup of specific orders by uuid or identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLookupRequest {
    pub market: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uuids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

/// Open (unfilled) order query.
///
/// `states` wins over `state` when both are supplied; the exchange rejects
/// requests carrying the two together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOrderRequest {
    pub market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<OrderState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

/// Closed (done or cancelled) order query.
///
/// The exchange limits the `start_time`/`end_time` window to one hour; wider
/// ranges must be paged by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedOrderRequest {
    pub market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<OrderState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

/// Candle history query
#[derive(Debug, Clone, PartialEq)]
pub struct CandleRequest {
    pub market: String,
    pub interval: CandleInterval,
    /// Minute-candle unit (1, 3, 5, 15, 30, 60, 240); ignored otherwise
    pub unit: u32,
    pub count: u32,
    /// Last candle time (ISO-8601); defaults to the most recent candle
    pub to: Option<String>,
}

impl CandleRequest {
    pub fn new(market: impl Into<String>, interval: CandleInterval, count: u32) -> Self {
        Self {
            market: market.into(),
            interval,
            unit: 1,
            count,
            to: None,
        }
    }
}

/// Recent trade query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeTicksRequest {
    pub market: String,
    pub count: u32,
    /// Latest trade time (UTC, `HHmmss` or `HH:mm:ss`)
    pub to: Option<String>,
    pub cursor: Option<String>,
    pub days_ago: Option<u32>,
}
