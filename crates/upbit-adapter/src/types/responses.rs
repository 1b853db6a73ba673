/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs for the authenticated API
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrdType, OrderSide, OrderState, TimeInForce};

/// One currency balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub avg_buy_price: Decimal,
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

/// Response to a freshly placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub uuid: String,
    pub side: OrderSide,
    pub ord_type: OrdType,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    pub state: OrderState,
    pub market: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub remaining_volume: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub reserved_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub paid_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_volume: Decimal,
    pub trades_count: u32,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
}

/// Order as returned by the query endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub uuid: String,
    pub side: OrderSide,
    pub ord_type: OrdType,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    pub state: OrderState,
    pub market: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub remaining_volume: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub reserved_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub paid_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_volume: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub executed_funds: Option<Decimal>,
    pub trades_count: u32,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
}

/// Single order with its executed trades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub market: String,
    pub uuid: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub funds: Decimal,
    pub side: OrderSide,
    pub created_at: DateTime<Utc>,
}

/// What can currently be ordered on one market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderChance {
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_fee: Decimal,
    pub market: OrderMarket,
    #[serde(default)]
    pub ask_types: Option<Vec<String>>,
    #[serde(default)]
    pub bid_types: Option<Vec<String>>,
    pub bid_account: Account,
    pub ask_account: Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMarket {
    pub id: String,
    pub name: String,
    /// Deprecated by the exchange; kept for older payloads
    #[serde(default)]
    pub order_types: Option<Vec<String>>,
    pub order_sides: Vec<OrderSide>,
    pub bid: OrderConstraint,
    pub ask: OrderConstraint,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_total: Decimal,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConstraint {
    pub currency: String,
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_total: Decimal,
}
