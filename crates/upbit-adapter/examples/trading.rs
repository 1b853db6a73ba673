/*
[INPUT]:  UPBIT_ACCESS_KEY / UPBIT_SECRET_KEY environment variables
[OUTPUT]: Account balances and an order place/cancel round trip
[POS]:    Examples - authenticated trading flow
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use upbit_adapter::*;

/// Example: Authenticated account queries and an order round trip.
///
/// Requires real API keys; the placed order sits far below market price so it
/// rests unfilled until the cancel lands.
#[tokio::main]
async fn main() {
    println!("=== Upbit Trading Example ===\n");

    let (access_key, secret_key) = match (
        std::env::var("UPBIT_ACCESS_KEY"),
        std::env::var("UPBIT_SECRET_KEY"),
    ) {
        (Ok(access_key), Ok(secret_key)) => (access_key, secret_key),
        _ => {
            eprintln!("Set UPBIT_ACCESS_KEY and UPBIT_SECRET_KEY to run this example");
            return;
        }
    };

    let client = match UpbitClient::with_credentials(Credentials::new(access_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Authenticated client created\n");

    // Balances
    println!("Querying accounts...");
    match client.get_accounts().await {
        Ok(accounts) => {
            for account in &accounts {
                println!("✓ {}: {} (locked {})", account.currency, account.balance, account.locked);
            }
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    // Place a resting limit bid and cancel it
    println!("\nPlacing limit bid on KRW-BTC...");
    let order = PlaceOrderRequest {
        market: "KRW-BTC".to_string(),
        side: OrderSide::Bid,
        volume: Some("0.0001".parse().unwrap()),
        price: Some("50000000".parse().unwrap()),
        ord_type: OrdType::Limit,
        identifier: None,
        time_in_force: None,
    };

    let placed = match client.place_order(&order).await {
        Ok(placed) => {
            println!("✓ Order placed: {} ({:?})", placed.uuid, placed.state);
            placed
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nCancelling order {}...", placed.uuid);
    let cancel = CancelOrderRequest {
        uuid: Some(placed.uuid.clone()),
        identifier: None,
    };
    match client.cancel_order(&cancel).await {
        Ok(cancelled) => println!("✓ Cancel accepted: {:?}", cancelled.state),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
