use pizza_orders::config::Config;
use pizza_orders::lifecycle::PizzaSystem;
use pizza_orders::model::{OrderId, OrderStatus, PizzaSize};
use pizza_orders::order_actor::OrderError;
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn alice() -> Value {
    json!({
        "customer": "Alice",
        "address": "123 Main St",
        "items": [
            {"pizza": "Margherita", "size": "Medium", "quantity": 2, "extraToppings": ["Olives"]}
        ],
        "total": 19.00
    })
}

/// Full end-to-end test of the order lifecycle through a running system.
#[tokio::test]
async fn test_full_order_lifecycle() {
    let system = PizzaSystem::new(Config::default()).expect("Failed to start system");
    let orders = &system.order_client;

    let first = orders.create_order(&alice()).await.expect("Failed to create order");
    assert_eq!(first.order_id, OrderId(1001));
    assert_eq!(first.status, OrderStatus::Preparing);
    assert_eq!(first.items[0].size, PizzaSize::Medium);
    assert_eq!(first.items[0].extra_toppings, vec!["Olives".to_string()]);
    assert_eq!(first.total, Decimal::new(1900, 2));

    let second = orders.create_order(&alice()).await.expect("Failed to create order");
    assert_eq!(second.order_id, OrderId(1002));

    // Listing follows creation order
    let ids: Vec<OrderId> = orders
        .list_orders()
        .await
        .unwrap()
        .iter()
        .map(|o| o.order_id)
        .collect();
    assert_eq!(ids, vec![OrderId(1001), OrderId(1002)]);

    // Read back
    let fetched = orders.get_order(first.order_id).await.unwrap();
    assert_eq!(fetched, first);

    // Full replacement keeps the ID
    let mut replacement = alice();
    replacement["customer"] = json!("Alice Smith");
    replacement["status"] = json!("Cooking");
    let updated = orders.update_order(first.order_id, &replacement).await.unwrap();
    assert_eq!(updated.order_id, first.order_id);
    assert_eq!(updated.customer, "Alice Smith");
    assert_eq!(updated.status, OrderStatus::Cooking);
    assert_eq!(orders.get_order(first.order_id).await.unwrap(), updated);

    // Partial update touches only the given fields
    let patched = orders
        .patch_order(first.order_id, json!({"address": "456 Oak Ave"}))
        .await
        .unwrap();
    assert_eq!(patched.address, "456 Oak Ave");
    assert_eq!(patched.customer, "Alice Smith");
    assert_eq!(patched.items, updated.items);

    // Delete, then the ID is gone for every operation
    orders.delete_order(second.order_id).await.unwrap();
    let gone = Err(OrderError::NotFound(OrderId(1002)));
    assert_eq!(orders.get_order(OrderId(1002)).await, gone);
    assert_eq!(orders.delete_order(OrderId(1002)).await, Err(OrderError::NotFound(OrderId(1002))));
    assert_eq!(orders.update_order(OrderId(1002), &alice()).await, gone);

    // IDs are never reused
    let third = orders.create_order(&alice()).await.unwrap();
    assert_eq!(third.order_id, OrderId(1003));

    let ids: Vec<OrderId> = orders
        .list_orders()
        .await
        .unwrap()
        .iter()
        .map(|o| o.order_id)
        .collect();
    assert_eq!(ids, vec![OrderId(1001), OrderId(1003)]);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_invalid_payload_reports_every_violation() {
    let system = PizzaSystem::new(Config::default()).unwrap();

    let payload = json!({
        "customer": "",
        "items": [
            {"pizza": "Calzone", "size": "Medium", "quantity": 1},
            {"pizza": "Veggie", "size": "Huge", "quantity": 0}
        ],
        "total": -1
    });
    let err = system.order_client.create_order(&payload).await.unwrap_err();

    let OrderError::Validation(errors) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    for path in [
        "customer",
        "address",
        "items[0].pizza",
        "items[1].size",
        "items[1].quantity",
        "total",
    ] {
        assert!(errors.contains(path), "missing violation for {path}: {errors}");
    }
    assert_eq!(errors.len(), 6);

    // Nothing was stored and no ID was consumed
    assert!(system.order_client.list_orders().await.unwrap().is_empty());
    let order = system.order_client.create_order(&alice()).await.unwrap();
    assert_eq!(order.order_id, OrderId(1001));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let system = PizzaSystem::new(Config::default()).unwrap();
    let orders = &system.order_client;

    let stored = orders.create_order(&alice()).await.unwrap();

    // Invalid payload against an existing order: rejected, order unchanged
    let err = orders
        .update_order(stored.order_id, &json!({"customer": "Bob"}))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
    assert_eq!(orders.get_order(stored.order_id).await.unwrap(), stored);

    // Invalid payload against a missing order is still a validation error
    let err = orders
        .update_order(OrderId(4242), &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    // Valid payload against a missing order: NotFound, store unchanged
    assert_eq!(
        orders.update_order(OrderId(4242), &alice()).await,
        Err(OrderError::NotFound(OrderId(4242)))
    );
    assert_eq!(orders.list_orders().await.unwrap(), vec![stored]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_flow() {
    let system = PizzaSystem::new(Config::default()).unwrap();
    let orders = &system.order_client;
    let id = orders.create_order(&alice()).await.unwrap().order_id;

    // The guarded path refuses skips
    assert_eq!(
        orders.advance_status(id, OrderStatus::Delivered).await,
        Err(OrderError::IllegalTransition {
            id,
            from: OrderStatus::Preparing,
            to: OrderStatus::Delivered,
        })
    );

    for next in [
        OrderStatus::Cooking,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ] {
        let order = orders.advance_status(id, next).await.unwrap();
        assert_eq!(order.status, next);
    }

    // Delivered is terminal for the guarded path
    assert!(matches!(
        orders.advance_status(id, OrderStatus::Cancelled).await,
        Err(OrderError::IllegalTransition { .. })
    ));

    // Plain updates stay unguarded
    let reopened = orders
        .patch_order(id, json!({"status": "Preparing"}))
        .await
        .unwrap();
    assert_eq!(reopened.status, OrderStatus::Preparing);

    assert_eq!(
        orders.advance_status(OrderId(9999), OrderStatus::Cooking).await,
        Err(OrderError::NotFound(OrderId(9999)))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_menu_and_first_id() {
    let config = Config::from_toml_str(
        r#"
        [store]
        first_order_id = 1

        [[menu]]
        name = "Margherita"
        available_sizes = ["Small"]
        base_price = 6.5
        "#,
    )
    .unwrap();
    let system = PizzaSystem::new(config).unwrap();
    let orders = &system.order_client;

    assert_eq!(orders.list_menu().len(), 1);

    let err = orders.create_order(&alice()).await.unwrap_err();
    let OrderError::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(
        errors.reason("items[0].size"),
        Some("'Medium' is not available for Margherita")
    );

    let mut small = alice();
    small["items"][0]["size"] = json!("Small");
    let order = orders.create_order(&small).await.unwrap();
    assert_eq!(order.order_id, OrderId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let system = PizzaSystem::new(Config::default()).unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            client.create_order(&alice()).await.unwrap().order_id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1001..1051).collect::<Vec<u32>>());

    // Listing is creation order, which for sequential IDs is ascending
    let listed: Vec<u32> = system
        .order_client
        .list_orders()
        .await
        .unwrap()
        .iter()
        .map(|o| o.order_id.0)
        .collect();
    assert_eq!(listed, ids);

    system.shutdown().await.unwrap();
}
