//! Request sender demo.
//!
//! Sends an echo request, then a reverse request one second later. Each
//! request uses its own builder and its own connection.
//!
//! Start the demo server first, then:
//!
//! ```text
//! cargo run --example echo_server
//! cargo run --example send_requests [socket-path]
//! ```

use std::time::Duration;

use plde_client::{Client, ClientConfig, EchoRequest, ReverseRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::unix(path),
        None => ClientConfig::default(),
    };
    let client = Client::new(config)?;

    match client
        .request(&EchoRequest {
            message: "Hello from Rust!".to_string(),
        })
        .await
    {
        Ok(response) => println!("echo response: {}", String::from_utf8_lossy(&response)),
        Err(e) => eprintln!("echo request failed: {}", e),
    }

    tokio::time::sleep(Duration::from_secs(1)).await;

    match client
        .request(&ReverseRequest {
            data: "Rust reverse test".to_string(),
        })
        .await
    {
        Ok(response) => println!("reverse response: {}", String::from_utf8_lossy(&response)),
        Err(e) => eprintln!("reverse request failed: {}", e),
    }

    Ok(())
}
