/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Market data (listings, candles, trades, tickers, order books)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Params, Result, UpbitClient};
use crate::types::{
    Candle, CandleInterval, CandleRequest, Market, OrderBook, QuoteCurrency, SupportedLevels,
    TickerSnapshot, TradeTick, TradeTicksRequest,
};

impl UpbitClient {
    /// List all markets
    ///
    /// GET /market/all
    pub async fn get_markets(&self, is_details: bool) -> Result<Vec<Market>> {
        let mut params = Params::new();
        if is_details {
            params.set("isDetails", "true");
        }
        self.get("/market/all", &params).await
    }

    /// Candle history for one market
    ///
    /// GET /candles/minutes/{unit} | /candles/days | /candles/weeks | /candles/months
    pub async fn get_candles(&self, request: &CandleRequest) -> Result<Vec<Candle>> {
        let path = match request.interval {
            CandleInterval::Minute => format!("/candles/minutes/{}", request.unit),
            CandleInterval::Day => "/candles/days".to_string(),
            CandleInterval::Week => "/candles/weeks".to_string(),
            CandleInterval::Month => "/candles/months".to_string(),
        };

        let mut params = Params::new();
        params.set("market", request.market.as_str());
        params.set("count", request.count.to_string());
        if let Some(to) = &request.to {
            params.set("to", to.as_str());
        }

        self.get(&path, &params).await
    }

    /// Most recent trades for one market
    ///
    /// GET /trades/ticks
    pub async fn get_trade_ticks(&self, request: &TradeTicksRequest) -> Result<Vec<TradeTick>> {
        let mut params = Params::new();
        params.set("market", request.market.as_str());
        params.set("count", request.count.to_string());
        if let Some(to) = &request.to {
            params.set("to", to.as_str());
        }
        if let Some(cursor) = &request.cursor {
            params.set("cursor", cursor.as_str());
        }
        if let Some(days_ago) = request.days_ago {
            params.set("daysAgo", days_ago.to_string());
        }

        self.get("/trades/ticks", &params).await
    }

    /// Price snapshots for the given markets (`"KRW-BTC"` style codes)
    ///
    /// GET /ticker
    pub async fn get_tickers(&self, markets: &[&str]) -> Result<Vec<TickerSnapshot>> {
        let mut params = Params::new();
        params.set("markets", markets.join(","));
        self.get("/ticker", &params).await
    }

    /// Price snapshots for every market quoted in the given currencies
    ///
    /// GET /ticker/all
    pub async fn get_all_tickers(
        &self,
        quote_currencies: &[QuoteCurrency],
    ) -> Result<Vec<TickerSnapshot>> {
        let csv = quote_currencies
            .iter()
            .map(QuoteCurrency::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let mut params = Params::new();
        params.set("quoteCurrencies", csv);
        self.get("/ticker/all", &params).await
    }

    /// Order book snapshots; `level` selects price aggregation (KRW markets)
    ///
    /// GET /orderbook
    pub async fn get_orderbooks(
        &self,
        markets: &[&str],
        level: Option<f64>,
    ) -> Result<Vec<OrderBook>> {
        let mut params = Params::new();
        params.set("markets", markets.join(","));
        if let Some(level) = level {
            params.set("level", level.to_string());
        }
        self.get("/orderbook", &params).await
    }

    /// Aggregation levels each market supports
    ///
    /// GET /orderbook/supported_levels
    pub async fn get_orderbook_levels(&self, markets: &[&str]) -> Result<Vec<SupportedLevels>> {
        let mut params = Params::new();
        params.set("markets", markets.join(","));
        self.get("/orderbook/supported_levels", &params).await
    }
}
