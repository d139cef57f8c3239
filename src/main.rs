//! # Pizza Orders Demo
//!
//! Starts a [`PizzaSystem`], walks one order through its whole life and prints each result as
//! JSON:
//! 1. List the menu.
//! 2. Create two orders (IDs 1001 and 1002 by default).
//! 3. Patch the address, advance the status, replace the whole order.
//! 4. Delete one order and submit an invalid payload.

use clap::Parser;
use pizza_orders::config::Config;
use pizza_orders::lifecycle::{setup_tracing, PizzaSystem};
use pizza_orders::model::OrderStatus;
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

#[derive(Parser, Debug)]
#[command(name = "pizza-orders", about = "In-memory pizza order store demo")]
struct Args {
    /// TOML file overriding the store settings and the menu
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    info!("Starting pizza order system");
    let system = PizzaSystem::new(config)?;
    let orders = &system.order_client;

    println!("Menu:\n{}", serde_json::to_string_pretty(orders.list_menu())?);

    let span = tracing::info_span!("order_creation");
    let (first, second) = async {
        info!("Creating demo orders");
        let first = orders
            .create_order(&json!({
                "customer": "Alice",
                "address": "123 Main St",
                "items": [
                    {"pizza": "Margherita", "size": "Medium", "quantity": 2, "extraToppings": ["Olives"]}
                ],
                "total": 19.00
            }))
            .await?;
        let second = orders
            .create_order(&json!({
                "customer": "Bob",
                "address": "9 Side Rd",
                "items": [{"pizza": "Pepperoni", "size": "Large", "quantity": 1}],
                "total": 12.00
            }))
            .await?;
        Ok::<_, pizza_orders::order_actor::OrderError>((first, second))
    }
    .instrument(span)
    .await?;

    println!("Created:\n{}", serde_json::to_string_pretty(&first)?);
    println!("All orders:\n{}", serde_json::to_string_pretty(&orders.list_orders().await?)?);

    let patched = orders
        .patch_order(first.order_id, json!({"address": "456 Oak Ave"}))
        .await?;
    println!("Patched:\n{}", serde_json::to_string_pretty(&patched)?);

    let cooking = orders
        .advance_status(first.order_id, OrderStatus::Cooking)
        .await?;
    info!(order_id = %cooking.order_id, status = %cooking.status, "Order advanced");

    let replaced = orders
        .update_order(
            second.order_id,
            &json!({
                "customer": "Bob",
                "address": "9 Side Rd",
                "items": [{"pizza": "Hawaiian", "size": "Small", "quantity": 3}],
                "total": 24.75,
                "status": "OutForDelivery"
            }),
        )
        .await?;
    println!("Replaced:\n{}", serde_json::to_string_pretty(&replaced)?);

    orders.delete_order(second.order_id).await?;
    match orders.get_order(second.order_id).await {
        Ok(order) => warn!(order_id = %order.order_id, "Deleted order still readable"),
        Err(e) => info!(error = %e, "Deleted order is gone"),
    }

    match orders
        .create_order(&json!({"customer": "", "items": [{"pizza": "Calzone", "quantity": 0}]}))
        .await
    {
        Ok(order) => warn!(order_id = %order.order_id, "Invalid payload was accepted"),
        Err(e) => println!("Rejected: {}", e),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
