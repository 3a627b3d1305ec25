//! Basic usage example for the Redis gateway client
//!
//! Run with: cargo run --example basic_usage
//! Set GATEWAY_URL and GATEWAY_TOKEN to point at a live gateway.

use std::collections::HashMap;
use std::time::Duration;

use redis_gateway_client::{Client, ClientConfig, SetOperation};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let base_url =
        std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let mut headers = HashMap::new();
    if let Ok(token) = std::env::var("GATEWAY_TOKEN") {
        headers.insert("authorization".to_string(), format!("Bearer {}", token));
    }

    let client = Client::with_config(ClientConfig {
        base_url,
        timeout: Some(Duration::from_secs(10)),
        headers,
    });
    let strings = client.string();

    // Store a value
    info!("Storing key 'example:greeting'...");
    strings.set("example:greeting", "Hello, gateway!", None).await?;

    // Retrieve it
    info!("Retrieving key 'example:greeting'...");
    match strings.get("example:greeting").await? {
        Some(value) => info!("Retrieved: {}", value),
        None => info!("Key not found"),
    }

    // Store a value that expires in an hour
    info!("Storing key 'example:session' with a one-hour TTL...");
    strings.set("example:session", "user-42", Some(3600)).await?;

    // Ask the gateway about it
    info!("Fetching info for 'example:session'...");
    if let Some(info_body) = strings.info("example:session").await? {
        info!("Info: {}", info_body);
    }

    // Batch store and batch fetch
    info!("Batch storing three users...");
    let ops = vec![
        SetOperation {
            key: "example:user:1".to_string(),
            value: "Alice".to_string(),
            ttl: None,
        },
        SetOperation {
            key: "example:user:2".to_string(),
            value: "Bob".to_string(),
            ttl: None,
        },
        SetOperation {
            key: "example:user:3".to_string(),
            value: "Carol".to_string(),
            ttl: Some(60),
        },
    ];
    strings.batch_set(&ops).await?;

    info!("Batch fetching them back...");
    let keys: Vec<String> = ops.iter().map(|op| op.key.clone()).collect();
    for (key, value) in keys.iter().zip(strings.batch_get(&keys).await?) {
        info!("  {} = {:?}", key, value);
    }

    // Clean up
    info!("Deleting example keys...");
    for key in keys.iter().map(String::as_str).chain(["example:greeting", "example:session"]) {
        let deleted = strings.delete(key).await?;
        info!("  {} deleted: {}", key, deleted);
    }

    info!("Example completed successfully!");
    Ok(())
}
