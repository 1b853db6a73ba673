/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Bid,
    Ask,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Bid => "bid",
            OrderSide::Ask => "ask",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdType {
    Limit,
    Price,
    Market,
    Best,
}

impl OrdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdType::Limit => "limit",
            OrdType::Price => "price",
            OrdType::Market => "market",
            OrdType::Best => "best",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Wait,
    Watch,
    Done,
    Cancel,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Wait => "wait",
            OrderState::Watch => "watch",
            OrderState::Done => "done",
            OrderState::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "asc",
            OrderBy::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    Ioc,
    Fok,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Ioc => "ioc",
            TimeInForce::Fok => "fok",
        }
    }
}

/// Candle aggregation interval; selects the endpoint path, not a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleInterval {
    Minute,
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteCurrency {
    #[serde(rename = "KRW")]
    Krw,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "USDT")]
    Usdt,
}

impl QuoteCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteCurrency::Krw => "KRW",
            QuoteCurrency::Btc => "BTC",
            QuoteCurrency::Usdt => "USDT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_side_wire_names() {
        assert_eq!(serde_json::to_string(&OrderSide::Bid).unwrap(), r#""bid""#);
        assert_eq!(OrderSide::Ask.as_str(), "ask");
    }

    #[test]
    fn test_order_state_round_trip() {
        let state: OrderState = serde_json::from_str(r#""watch""#).unwrap();
        assert_eq!(state, OrderState::Watch);
        assert_eq!(state.as_str(), "watch");
    }

    #[test]
    fn test_quote_currency_uppercase_on_wire() {
        assert_eq!(QuoteCurrency::Krw.as_str(), "KRW");
        assert_eq!(
            serde_json::to_string(&QuoteCurrency::Usdt).unwrap(),
            r#""USDT""#
        );
    }
}
