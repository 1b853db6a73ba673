/*
[INPUT]:  Channel type, market codes and delivery-mode flags
[OUTPUT]: The three-frame subscription request the streaming protocol expects
[POS]:    WebSocket layer - subscription request construction
[UPDATE]: When the exchange changes its subscription framing
*/

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format literal the exchange substitutes when the caller leaves it empty
pub const DEFAULT_FORMAT: &str = "DEFAULT";

/// Streaming channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "ticker")]
    Ticker,
    #[serde(rename = "trade")]
    Trade,
    #[serde(rename = "orderbook")]
    Orderbook,
    #[serde(rename = "myOrder")]
    MyOrder,
    #[serde(rename = "myAsset")]
    MyAsset,
}

impl Channel {
    /// Private channels stream the caller's own data and take no market codes
    pub fn is_private(&self) -> bool {
        matches!(self, Channel::MyOrder | Channel::MyAsset)
    }
}

/// One subscription request.
///
/// Exists only to build the wire frames; the session keeps no record of
/// active subscriptions after the request is written, so a recreated session
/// must subscribe again.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// Random identifier correlating the request with its data stream
    pub ticket: String,
    pub channel: Channel,
    /// Market codes (`"KRW-BTC"` style); required for public channels,
    /// absent for private ones
    pub codes: Option<Vec<String>>,
    pub is_only_snapshot: bool,
    pub is_only_realtime: bool,
    /// Payload field naming; empty resolves to [`DEFAULT_FORMAT`]
    pub format: String,
}

impl Subscription {
    /// Subscription for a public channel with the given market codes
    pub fn new(channel: Channel, codes: Vec<String>) -> Self {
        Self {
            ticket: Uuid::new_v4().to_string(),
            channel,
            codes: Some(codes),
            is_only_snapshot: false,
            is_only_realtime: false,
            format: String::new(),
        }
    }

    /// Subscription for a private channel (`myOrder`, `myAsset`)
    pub fn private(channel: Channel) -> Self {
        Self {
            ticket: Uuid::new_v4().to_string(),
            channel,
            codes: None,
            is_only_snapshot: false,
            is_only_realtime: false,
            format: String::new(),
        }
    }

    pub fn with_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.ticket = ticket.into();
        self
    }

    pub fn snapshot_only(mut self) -> Self {
        self.is_only_snapshot = true;
        self
    }

    pub fn realtime_only(mut self) -> Self {
        self.is_only_realtime = true;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Build the wire frames: ticket, then the type descriptor, then the
    /// format, in exactly that order. Flags and codes appear only when set.
    pub fn frames(&self) -> [SubscriptionFrame; 3] {
        let format = if self.format.is_empty() {
            DEFAULT_FORMAT
        } else {
            &self.format
        };

        [
            SubscriptionFrame {
                ticket: Some(self.ticket.clone()),
                ..SubscriptionFrame::default()
            },
            SubscriptionFrame {
                channel: Some(self.channel),
                codes: self.codes.clone(),
                is_only_snapshot: self.is_only_snapshot.then_some(true),
                is_only_realtime: self.is_only_realtime.then_some(true),
                ..SubscriptionFrame::default()
            },
            SubscriptionFrame {
                format: Some(format.to_string()),
                ..SubscriptionFrame::default()
            },
        ]
    }
}

/// One element of the three-part subscription request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codes: Option<Vec<String>>,
    #[serde(rename = "isOnlySnapshot", skip_serializing_if = "Option::is_none")]
    pub is_only_snapshot: Option<bool>,
    #[serde(rename = "isOnlyRealtime", skip_serializing_if = "Option::is_none")]
    pub is_only_realtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
