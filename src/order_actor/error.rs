//! Error types for the order store.

use crate::model::{OrderId, OrderStatus};
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The payload broke one or more order rules. Nothing was stored.
    #[error("Order validation error: {0}")]
    Validation(ValidationError),

    /// No live order has this ID.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// Every order ID has been issued; no further orders can be created.
    #[error("No order IDs left")]
    IdsExhausted,

    /// A guarded status change was asked to skip or reverse the delivery flow.
    #[error("Illegal status transition for order {id}: {from} -> {to}")]
    IllegalTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The stored order could not be turned back into a payload for merging.
    #[error("Order serialization error: {0}")]
    Serialization(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ValidationError> for OrderError {
    fn from(errors: ValidationError) -> Self {
        OrderError::Validation(errors)
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(e: serde_json::Error) -> Self {
        OrderError::Serialization(e.to_string())
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
