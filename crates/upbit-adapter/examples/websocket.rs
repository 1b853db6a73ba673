/*
[INPUT]:  Market codes to stream
[OUTPUT]: Live ticker events printed to stdout
[POS]:    Examples - public WebSocket streaming
[UPDATE]: When adding new channels or changing connection logic
*/

use upbit_adapter::*;

/// Example: Stream live tickers from the public WebSocket endpoint
#[tokio::main]
async fn main() {
    println!("=== Upbit WebSocket Example ===\n");

    let session = match PublicWebSocket::connect().await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to connect: {}", e);
            return;
        }
    };
    println!("✓ Connected to public stream\n");

    let subscription = Subscription::new(
        Channel::Ticker,
        vec!["KRW-BTC".to_string(), "KRW-ETH".to_string()],
    );
    if let Err(e) = session.subscribe(&subscription).await {
        eprintln!("Failed to subscribe: {}", e);
        return;
    }
    println!("✓ Subscribed to tickers (ticket {})\n", subscription.ticket);

    for _ in 0..10 {
        match session.read_message::<TickerData>().await {
            Ok(event) => {
                println!("{}: {} ({:+.2}%)", event.code, event.trade_price, event.signed_change_rate * 100.0);
            }
            Err(e) => {
                eprintln!("Read failed: {}", e);
                break;
            }
        }
    }

    if let Err(e) = session.close().await {
        eprintln!("Close failed: {}", e);
    }
    println!("\n✓ WebSocket example complete");
}
