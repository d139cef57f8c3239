//! Order data: identifiers, statuses, line items and the stored order record.
//!
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait (see
//! [`crate::order_actor::entity`]), which lets the generic
//! [`ResourceActor`](crate::framework::ResourceActor) act as the order store.
//!
//! JSON field names follow the public API: `orderId`, `extraToppings`, and so on.

use crate::model::PizzaSize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order is in its life.
///
/// The intended flow is Preparing → Cooking → OutForDelivery → Delivered, with Cancelled
/// reachable from the first three. Delivered and Cancelled are terminal. Updates may set any
/// status; only [`OrderAction::AdvanceStatus`](crate::order_actor::OrderAction) checks the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Preparing,
    Cooking,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Preparing,
        OrderStatus::Cooking,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `next` is a legal successor of `self` in the delivery flow.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Preparing, Cooking)
                | (Cooking, OutForDelivery)
                | (OutForDelivery, Delivered)
                | (Preparing | Cooking | OutForDelivery, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::OutForDelivery => "OutForDelivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.to_string() == s)
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub pizza: String,
    pub size: PizzaSize,
    pub quantity: u32,
    #[serde(default)]
    pub extra_toppings: Vec<String>,
}

/// A validated order that has not been given an ID yet.
///
/// Only [`validate_order`](crate::validation::validate_order) produces one from untrusted
/// input, so holding a draft means every validation rule has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
}

/// A stored customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub customer: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(order_id: OrderId, draft: OrderDraft) -> Self {
        Self {
            order_id,
            customer: draft.customer,
            address: draft.address,
            items: draft.items,
            total: draft.total,
            status: draft.status,
        }
    }

    /// Replaces every field except `order_id`.
    pub fn replace_with(&mut self, draft: OrderDraft) {
        *self = Self::new(self.order_id, draft);
    }

    /// The order's fields without its ID.
    pub fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            customer: self.customer.clone(),
            address: self.address.clone(),
            items: self.items.clone(),
            total: self.total,
            status: self.status,
        }
    }
}

/// Payload for updating a stored order.
#[derive(Debug, Clone)]
pub enum OrderUpdate {
    /// Full replacement with an already validated order.
    Replace(OrderDraft),
    /// Partial JSON payload, merged into the stored order and validated by the store.
    Merge(serde_json::Value),
}
