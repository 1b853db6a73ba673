/*
[INPUT]:  Market codes (e.g., "KRW-BTC")
[OUTPUT]: Market data (listings, tickers, candles, order books)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use upbit_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Upbit Market Data Example ===\n");

    let client = match UpbitClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    // List all markets
    println!("Listing markets...");
    match client.get_markets(false).await {
        Ok(markets) => println!("✓ {} markets listed", markets.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Current prices
    println!("\nQuerying tickers for KRW-BTC, KRW-ETH...");
    match client.get_tickers(&["KRW-BTC", "KRW-ETH"]).await {
        Ok(tickers) => {
            for ticker in tickers {
                println!("✓ {}: {} ({})", ticker.market, ticker.trade_price, ticker.change);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // 15-minute candles
    println!("\nQuerying 15-minute candles for KRW-BTC...");
    let mut request = CandleRequest::new("KRW-BTC", CandleInterval::Minute, 5);
    request.unit = 15;
    match client.get_candles(&request).await {
        Ok(candles) => {
            for candle in candles {
                println!("✓ {} close {}", candle.candle_date_time_utc, candle.trade_price);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Order book
    println!("\nQuerying order book for KRW-BTC...");
    match client.get_orderbooks(&["KRW-BTC"], None).await {
        Ok(books) => {
            if let Some(best) = books.first().and_then(|book| book.orderbook_units.first()) {
                println!("✓ best ask {} / best bid {}", best.ask_price, best.bid_price);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
