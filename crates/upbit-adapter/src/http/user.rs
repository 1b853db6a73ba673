/*
[INPUT]:  Query parameters and signed credentials
[OUTPUT]: Account balances and order history
[POS]:    HTTP layer - account endpoints (require authentication)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{Params, Result, UpbitClient};
use crate::types::{
    Account, ClosedOrderRequest, OpenOrderRequest, Order, OrderChance, OrderDetail,
    OrderLookupRequest, OrderState,
};

impl UpbitClient {
    /// All account balances.
    ///
    /// GET /accounts — carries no parameters, so the signed token holds only
    /// the `access_key`/`nonce` claims.
    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.require_credentials()?;
        self.get("/accounts", &Params::new()).await
    }

    /// Order availability for one market
    ///
    /// GET /orders/chance
    pub async fn get_order_chance(&self, market: &str) -> Result<OrderChance> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("market", market);
        self.get("/orders/chance", &params).await
    }

    /// Single order with its trades
    ///
    /// GET /order
    pub async fn get_order(&self, uuid: &str) -> Result<OrderDetail> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("uuid", uuid);
        self.get("/order", &params).await
    }

    /// Orders matching specific uuids or identifiers
    ///
    /// GET /orders/uuids
    pub async fn get_orders_by_ids(&self, request: &OrderLookupRequest) -> Result<Vec<Order>> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("market", request.market.as_str());
        if let Some(order_by) = request.order_by {
            params.set("order_by", order_by.as_str());
        }
        for uuid in &request.uuids {
            params.append("uuids[]", uuid.as_str());
        }
        for identifier in &request.identifiers {
            params.append("identifiers[]", identifier.as_str());
        }

        self.get("/orders/uuids", &params).await
    }

    /// Open (unfilled) orders
    ///
    /// GET /orders/open
    pub async fn get_open_orders(&self, request: &OpenOrderRequest) -> Result<Vec<Order>> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("market", request.market.as_str());
        if let Some(page) = request.page {
            params.set("page", page.to_string());
        }
        if let Some(limit) = request.limit {
            params.set("limit", limit.to_string());
        }
        if let Some(order_by) = request.order_by {
            params.set("order_by", order_by.as_str());
        }
        set_state_filter(&mut params, request.state, &request.states);

        self.get("/orders/open", &params).await
    }

    /// Closed (done or cancelled) orders
    ///
    /// GET /orders/closed
    pub async fn get_closed_orders(&self, request: &ClosedOrderRequest) -> Result<Vec<Order>> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("market", request.market.as_str());
        if let Some(limit) = request.limit {
            params.set("limit", limit.to_string());
        }
        if let Some(order_by) = request.order_by {
            params.set("order_by", order_by.as_str());
        }
        if let Some(start_time) = request.start_time {
            params.set("start_time", start_time.to_rfc3339());
        }
        if let Some(end_time) = request.end_time {
            params.set("end_time", end_time.to_rfc3339());
        }
        set_state_filter(&mut params, request.state, &request.states);

        self.get("/orders/closed", &params).await
    }
}

/// `states[]` and `state` are mutually exclusive on the wire; the list wins
/// when both are populated.
fn set_state_filter(params: &mut Params, state: Option<OrderState>, states: &[OrderState]) {
    if !states.is_empty() {
        for state in states {
            params.append("states[]", state.as_str());
        }
    } else if let Some(state) = state {
        params.set("state", state.as_str());
    }
}
