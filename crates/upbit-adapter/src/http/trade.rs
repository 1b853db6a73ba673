/*
[INPUT]:  Order requests and signed credentials
[OUTPUT]: Order placement and cancellation confirmations
[POS]:    HTTP layer - trading endpoints (require authentication)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{Params, Result, UpbitClient};
use crate::types::{CancelOrderRequest, Order, PlaceOrderRequest, PlacedOrder};

impl UpbitClient {
    /// Place a new order.
    ///
    /// POST /orders — the parameters travel as the form body and the token's
    /// query hash is computed over that body.
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> Result<PlacedOrder> {
        self.require_credentials()?;

        let mut params = Params::new();
        params.set("market", request.market.as_str());
        params.set("side", request.side.as_str());
        params.set("ord_type", request.ord_type.as_str());
        if let Some(volume) = request.volume {
            params.set("volume", volume.to_string());
        }
        if let Some(price) = request.price {
            params.set("price", price.to_string());
        }
        if let Some(identifier) = &request.identifier {
            params.set("identifier", identifier.as_str());
        }
        if let Some(time_in_force) = request.time_in_force {
            params.set("time_in_force", time_in_force.as_str());
        }

        self.post("/orders", &params).await
    }

    /// Request cancellation of an order by uuid or identifier.
    ///
    /// DELETE /order
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<Order> {
        self.require_credentials()?;

        let mut params = Params::new();
        if let Some(uuid) = &request.uuid {
            params.set("uuid", uuid.as_str());
        }
        if let Some(identifier) = &request.identifier {
            params.set("identifier", identifier.as_str());
        }

        self.delete("/order", &params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, UpbitClient};
    use crate::types::{CancelOrderRequest, OrdType, OrderSide, PlaceOrderRequest};
    use wiremock::matchers::{body_string, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn authenticated_client(server: &MockServer) -> UpbitClient {
        UpbitClient::with_base_url(
            ClientConfig::default(),
            &server.uri(),
            Some(Credentials::new("test-access-key", "test-secret-key")),
        )
        .expect("client init")
    }

    const PLACED_ORDER_BODY: &str = r#"{
        "uuid": "cdd92199-2897-4e14-9448-f923320408ad",
        "side": "bid",
        "ord_type": "limit",
        "price": "80000000",
        "state": "wait",
        "market": "KRW-BTC",
        "created_at": "2024-09-19T16:00:00+09:00",
        "volume": "0.0001",
        "remaining_volume": "0.0001",
        "reserved_fee": "4.0",
        "remaining_fee": "4.0",
        "paid_fee": "0.0",
        "locked": "8004.0",
        "executed_volume": "0.0",
        "trades_count": 0
    }"#;

    #[tokio::test]
    async fn test_place_order_sends_form_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/orders"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header_exists("authorization"))
            .and(body_string(
                "market=KRW-BTC&ord_type=limit&price=80000000&side=bid&volume=0.0001",
            ))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(PLACED_ORDER_BODY, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = PlaceOrderRequest {
            market: "KRW-BTC".to_string(),
            side: OrderSide::Bid,
            volume: Some("0.0001".parse().unwrap()),
            price: Some("80000000".parse().unwrap()),
            ord_type: OrdType::Limit,
            identifier: None,
            time_in_force: None,
        };

        let placed = authenticated_client(&server)
            .place_order(&request)
            .await
            .expect("place_order failed");

        assert_eq!(placed.uuid, "cdd92199-2897-4e14-9448-f923320408ad");
        assert_eq!(placed.side, OrderSide::Bid);
        assert_eq!(placed.trades_count, 0);
    }

    #[tokio::test]
    async fn test_cancel_order_uses_delete_with_body() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "uuid": "cdd92199-2897-4e14-9448-f923320408ad",
            "side": "bid",
            "ord_type": "limit",
            "price": "80000000",
            "state": "wait",
            "market": "KRW-BTC",
            "created_at": "2024-09-19T16:00:00+09:00",
            "volume": "0.0001",
            "remaining_volume": "0.0001",
            "reserved_fee": "4.0",
            "remaining_fee": "4.0",
            "paid_fee": "0.0",
            "locked": "8004.0",
            "executed_volume": "0.0",
            "trades_count": 0
        }"#;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/order"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("uuid=cdd92199-2897-4e14-9448-f923320408ad"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = CancelOrderRequest {
            uuid: Some("cdd92199-2897-4e14-9448-f923320408ad".to_string()),
            identifier: None,
        };

        let cancelled = authenticated_client(&server)
            .cancel_order(&request)
            .await
            .expect("cancel_order failed");

        assert_eq!(cancelled.market, "KRW-BTC");
    }
}
