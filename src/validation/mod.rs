//! # Order Validator
//!
//! Turns an untyped JSON payload into an [`OrderDraft`] or a [`ValidationError`] listing every
//! broken rule at once. Validation is a pure function of the payload and the menu; it never
//! touches the store.
//!
//! Rules:
//! - `customer` and `address`: required, non-blank strings.
//! - `items`: required, non-empty list. For each `items[i]`: `pizza` must be on the menu,
//!   `size` must be one that pizza is sold in, `quantity` must be an integer ≥ 1, and
//!   `extraToppings` (optional, default empty) must be a list of strings.
//! - `total`: required number ≥ 0. It is taken as given, never recomputed. Numbers with more
//!   precision than a `Decimal` holds (28 fractional digits) are rounded; numbers above
//!   `Decimal::MAX` are out of range.
//! - `status`: optional, one of the [`OrderStatus`] names, default `Preparing`.
//!
//! Unknown keys, including a caller-supplied `orderId`, are ignored.

pub mod error;

pub use error::*;

use crate::menu::MenuCatalog;
use crate::model::{MenuItem, Order, OrderDraft, OrderItem, OrderStatus, PizzaSize};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Validates a create/replace payload against the menu.
pub fn validate_order(payload: &Value, menu: &MenuCatalog) -> Result<OrderDraft, ValidationError> {
    let mut errors = ValidationError::default();

    let Some(fields) = payload.as_object() else {
        errors.add("payload", "must be a JSON object");
        return Err(errors);
    };

    let customer = required_text(fields, "customer", &mut errors);
    let address = required_text(fields, "address", &mut errors);
    let items = order_items(fields, menu, &mut errors);
    let total = total(fields, &mut errors);
    let status = status(fields, &mut errors);

    match (customer, address, items, total, status) {
        (Some(customer), Some(address), Some(items), Some(total), Some(status)) if errors.is_empty() => {
            Ok(OrderDraft {
                customer,
                address,
                items,
                total,
                status,
            })
        }
        _ => Err(errors),
    }
}

/// Overlays the top-level keys of `patch` on the JSON form of `existing`.
///
/// The result is meant to go through [`validate_order`], so a partial update is checked as a
/// complete order. Keys are replaced wholesale (a patched `items` replaces the whole list) and
/// `orderId` is never carried over. A patch that is not an object is returned unchanged, so
/// validation reports it.
///
/// `total` goes through the JSON number form here. Callers that keep an unpatched total should
/// take it from `existing`, not from the validated result.
pub fn merge_payload(existing: &Order, patch: &Value) -> Result<Value, serde_json::Error> {
    let Value::Object(patch) = patch else {
        return Ok(patch.clone());
    };

    let mut merged = serde_json::to_value(existing.to_draft())?;
    if let Value::Object(fields) = &mut merged {
        for (key, value) in patch {
            if key != "orderId" {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(merged)
}

fn required_text(fields: &Map<String, Value>, key: &str, errors: &mut ValidationError) -> Option<String> {
    match fields.get(key) {
        None | Some(Value::Null) => errors.add(key, "is required"),
        Some(Value::String(s)) if s.trim().is_empty() => errors.add(key, "must not be empty"),
        Some(Value::String(s)) => return Some(s.clone()),
        Some(_) => errors.add(key, "must be a string"),
    }
    None
}

fn order_items(
    fields: &Map<String, Value>,
    menu: &MenuCatalog,
    errors: &mut ValidationError,
) -> Option<Vec<OrderItem>> {
    let entries = match fields.get("items") {
        None | Some(Value::Null) => {
            errors.add("items", "is required");
            return None;
        }
        Some(Value::Array(entries)) if entries.is_empty() => {
            errors.add("items", "must contain at least one item");
            return None;
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            errors.add("items", "must be a list");
            return None;
        }
    };

    // Keep checking every entry after a failure so all violations are reported.
    let parsed: Vec<Option<OrderItem>> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| order_item(&format!("items[{}]", i), entry, menu, errors))
        .collect();
    parsed.into_iter().collect()
}

fn order_item(path: &str, entry: &Value, menu: &MenuCatalog, errors: &mut ValidationError) -> Option<OrderItem> {
    let Some(fields) = entry.as_object() else {
        errors.add(path, "must be an object");
        return None;
    };

    let pizza_path = format!("{}.pizza", path);
    let menu_item = match fields.get("pizza") {
        None | Some(Value::Null) => {
            errors.add(pizza_path, "is required");
            None
        }
        Some(Value::String(name)) => match menu.find_menu_item(name) {
            Ok(item) => Some(item),
            Err(_) => {
                errors.add(pizza_path, format!("'{}' is not on the menu", name));
                None
            }
        },
        Some(_) => {
            errors.add(pizza_path, "must be a string");
            None
        }
    };

    let size = item_size(path, fields, menu_item, errors);
    let quantity = quantity(path, fields, errors);
    let extra_toppings = extra_toppings(path, fields, errors);

    Some(OrderItem {
        pizza: menu_item?.name.clone(),
        size: size?,
        quantity: quantity?,
        extra_toppings: extra_toppings?,
    })
}

fn item_size(
    path: &str,
    fields: &Map<String, Value>,
    menu_item: Option<&MenuItem>,
    errors: &mut ValidationError,
) -> Option<PizzaSize> {
    let size_path = format!("{}.size", path);
    let size = match fields.get("size") {
        None | Some(Value::Null) => {
            errors.add(size_path, "is required");
            return None;
        }
        Some(Value::String(name)) => match PizzaSize::from_str(name) {
            Ok(size) => size,
            Err(_) => {
                errors.add(size_path, "must be one of Small, Medium, Large");
                return None;
            }
        },
        Some(_) => {
            errors.add(size_path, "must be a string");
            return None;
        }
    };

    match menu_item {
        Some(item) if !item.offers(size) => {
            errors.add(size_path, format!("'{}' is not available for {}", size, item.name));
            None
        }
        _ => Some(size),
    }
}

fn quantity(path: &str, fields: &Map<String, Value>, errors: &mut ValidationError) -> Option<u32> {
    let quantity_path = format!("{}.quantity", path);
    match fields.get("quantity") {
        None | Some(Value::Null) => errors.add(quantity_path, "is required"),
        Some(Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
            (Some(0), _) | (None, Some(_)) => errors.add(quantity_path, "must be at least 1"),
            (Some(q), _) => match u32::try_from(q) {
                Ok(q) => return Some(q),
                Err(_) => errors.add(quantity_path, "is too large"),
            },
            (None, None) => errors.add(quantity_path, "must be an integer"),
        },
        Some(_) => errors.add(quantity_path, "must be an integer"),
    }
    None
}

fn extra_toppings(path: &str, fields: &Map<String, Value>, errors: &mut ValidationError) -> Option<Vec<String>> {
    let toppings_path = format!("{}.extraToppings", path);
    match fields.get("extraToppings") {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(entries)) => {
            let mut toppings = Vec::with_capacity(entries.len());
            for (j, entry) in entries.iter().enumerate() {
                match entry {
                    Value::String(topping) => toppings.push(topping.clone()),
                    _ => errors.add(format!("{}[{}]", toppings_path, j), "must be a string"),
                }
            }
            (toppings.len() == entries.len()).then_some(toppings)
        }
        Some(_) => {
            errors.add(toppings_path, "must be a list of strings");
            None
        }
    }
}

fn total(fields: &Map<String, Value>, errors: &mut ValidationError) -> Option<Decimal> {
    match fields.get("total") {
        None | Some(Value::Null) => errors.add("total", "is required"),
        Some(Value::Number(n)) => match to_decimal(n) {
            Some(total) if total < Decimal::ZERO => errors.add("total", "must not be negative"),
            Some(total) => return Some(total),
            None => errors.add("total", "is out of range"),
        },
        Some(_) => errors.add("total", "must be a number"),
    }
    None
}

fn status(fields: &Map<String, Value>, errors: &mut ValidationError) -> Option<OrderStatus> {
    match fields.get("status") {
        None | Some(Value::Null) => return Some(OrderStatus::default()),
        Some(Value::String(name)) => match OrderStatus::from_str(name) {
            Ok(status) => return Some(status),
            Err(_) => errors.add(
                "status",
                "must be one of Preparing, Cooking, OutForDelivery, Delivered, Cancelled",
            ),
        },
        Some(_) => errors.add("status", "must be a string"),
    }
    None
}

/// Exact conversion when the number fits a `Decimal`, otherwise the nearest `Decimal` to its
/// `f64` value. `None` only above `Decimal::MAX`.
fn to_decimal(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use serde_json::json;

    fn margherita_menu() -> MenuCatalog {
        MenuCatalog::new(vec![
            MenuItem::new("Margherita", PizzaSize::ALL.to_vec(), Decimal::new(800, 2)),
            MenuItem::new("Calzone", vec![PizzaSize::Medium], Decimal::new(900, 2)),
        ])
        .unwrap()
    }

    fn alice() -> Value {
        json!({
            "customer": "Alice",
            "address": "123 Main St",
            "items": [{
                "pizza": "Margherita",
                "size": "Large",
                "quantity": 1,
                "extraToppings": ["Olives"]
            }],
            "total": 9.50
        })
    }

    fn errors_for(payload: Value) -> ValidationError {
        validate_order(&payload, &margherita_menu()).unwrap_err()
    }

    #[test]
    fn test_valid_payload_defaults_status() {
        let draft = validate_order(&alice(), &margherita_menu()).unwrap();
        assert_eq!(draft.customer, "Alice");
        assert_eq!(draft.address, "123 Main St");
        assert_eq!(draft.total, Decimal::new(950, 2));
        assert_eq!(draft.status, OrderStatus::Preparing);
        assert_eq!(
            draft.items,
            vec![OrderItem {
                pizza: "Margherita".into(),
                size: PizzaSize::Large,
                quantity: 1,
                extra_toppings: vec!["Olives".into()],
            }]
        );
    }

    #[test]
    fn test_missing_toppings_default_to_empty_and_order_id_is_ignored() {
        let mut payload = alice();
        payload["items"][0].as_object_mut().unwrap().remove("extraToppings");
        payload["orderId"] = json!(7);
        payload["status"] = json!("Cooking");

        let draft = validate_order(&payload, &margherita_menu()).unwrap();
        assert!(draft.items[0].extra_toppings.is_empty());
        assert_eq!(draft.status, OrderStatus::Cooking);
    }

    #[test]
    fn test_unknown_pizza_is_reported_at_item_path() {
        let mut payload = alice();
        payload["items"][0]["pizza"] = json!("Hawaiian");

        let errors = errors_for(payload);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.reason("items[0].pizza"), Some("'Hawaiian' is not on the menu"));
    }

    #[test]
    fn test_size_must_be_known_and_offered() {
        let mut payload = alice();
        payload["items"][0]["size"] = json!("XL");
        assert!(errors_for(payload).contains("items[0].size"));

        let mut payload = alice();
        payload["items"][0]["pizza"] = json!("Calzone");
        let errors = errors_for(payload);
        assert_eq!(
            errors.reason("items[0].size"),
            Some("'Large' is not available for Calzone")
        );
    }

    #[test]
    fn test_quantity_rules() {
        for (quantity, reason) in [
            (json!(0), "must be at least 1"),
            (json!(-2), "must be at least 1"),
            (json!(1.5), "must be an integer"),
            (json!("2"), "must be an integer"),
            (json!(5_000_000_000u64), "is too large"),
        ] {
            let mut payload = alice();
            payload["items"][0]["quantity"] = quantity;
            assert_eq!(errors_for(payload).reason("items[0].quantity"), Some(reason));
        }
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut payload = alice();
        payload["items"] = json!([]);
        assert_eq!(
            errors_for(payload).reason("items"),
            Some("must contain at least one item")
        );
    }

    #[test]
    fn test_toppings_must_be_strings() {
        let mut payload = alice();
        payload["items"][0]["extraToppings"] = json!(["Olives", 3]);
        assert!(errors_for(payload).contains("items[0].extraToppings[1]"));

        let mut payload = alice();
        payload["items"][0]["extraToppings"] = json!("Olives");
        assert!(errors_for(payload).contains("items[0].extraToppings"));
    }

    #[test]
    fn test_total_and_status_rules() {
        let mut payload = alice();
        payload["total"] = json!(-0.01);
        payload["status"] = json!("Pending");
        let errors = errors_for(payload);
        assert_eq!(errors.reason("total"), Some("must not be negative"));
        assert!(errors.contains("status"));

        let mut payload = alice();
        payload["total"] = json!(0);
        assert_eq!(validate_order(&payload, &margherita_menu()).unwrap().total, Decimal::ZERO);

        let mut payload = alice();
        payload["total"] = json!("9.50");
        assert_eq!(errors_for(payload).reason("total"), Some("must be a number"));
    }

    #[test]
    fn test_total_beyond_decimal_precision() {
        let mut payload = alice();
        payload["total"] = json!(1e-30);
        let total = validate_order(&payload, &margherita_menu()).unwrap().total;
        assert!(total >= Decimal::ZERO && total < Decimal::new(1, 27));

        let mut payload = alice();
        payload["total"] = json!(1e20);
        assert_eq!(
            validate_order(&payload, &margherita_menu()).unwrap().total,
            Decimal::from_str("100000000000000000000").unwrap()
        );

        let mut payload = alice();
        payload["total"] = json!(1e29);
        assert_eq!(errors_for(payload).reason("total"), Some("is out of range"));
    }

    #[test]
    fn test_every_violation_is_collected() {
        let payload = json!({
            "address": "   ",
            "items": [
                {"pizza": "Hawaiian", "size": "Small", "quantity": 1},
                {"pizza": "Margherita", "size": "Medium", "quantity": 0},
                "not an item"
            ]
        });

        let errors = errors_for(payload);
        let paths: Vec<&str> = errors.violations().keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "address",
                "customer",
                "items[0].pizza",
                "items[1].quantity",
                "items[2]",
                "total"
            ]
        );
    }

    #[test]
    fn test_non_object_payload() {
        let errors = errors_for(json!([1, 2, 3]));
        assert_eq!(errors.reason("payload"), Some("must be a JSON object"));
    }

    #[test]
    fn test_merge_overlays_patch_on_existing_order() {
        let existing = Order::new(
            OrderId(1001),
            validate_order(&alice(), &margherita_menu()).unwrap(),
        );
        let merged = merge_payload(
            &existing,
            &json!({"status": "OutForDelivery", "orderId": 5, "address": "9 Elm St"}),
        )
        .unwrap();

        assert!(merged.get("orderId").is_none());
        let draft = validate_order(&merged, &margherita_menu()).unwrap();
        assert_eq!(draft.customer, "Alice");
        assert_eq!(draft.address, "9 Elm St");
        assert_eq!(draft.status, OrderStatus::OutForDelivery);
        assert_eq!(draft.items, existing.items);
    }
}
