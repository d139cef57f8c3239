//! # Order Client
//!
//! The facade callers use: it validates raw payloads against the menu, forwards typed requests
//! to the order store and turns framework failures back into [`OrderError`].
//!
//! | Operation | Returns | Fails with |
//! |---|---|---|
//! | [`list_menu`](OrderClient::list_menu) | menu items | never |
//! | [`create_order`](OrderClient::create_order) | stored order | `Validation`, `IdsExhausted` |
//! | [`list_orders`](OrderClient::list_orders) | orders in creation order | never (store running) |
//! | [`get_order`](OrderClient::get_order) | order | `NotFound` |
//! | [`update_order`](OrderClient::update_order) | updated order | `Validation`, `NotFound` |
//! | [`patch_order`](OrderClient::patch_order) | updated order | `Validation`, `NotFound` |
//! | [`advance_status`](OrderClient::advance_status) | updated order | `IllegalTransition`, `NotFound` |
//! | [`delete_order`](OrderClient::delete_order) | `()` | `NotFound` |
//!
//! Any operation can also fail with `ActorCommunicationError` once the store has shut down.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu::MenuCatalog;
use crate::model::{MenuItem, Order, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderAction, OrderError};
use crate::validation::validate_order;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Client for the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: Arc<MenuCatalog>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, menu: Arc<MenuCatalog>) -> Self {
        Self { inner, menu }
    }

    pub fn list_menu(&self) -> &[MenuItem] {
        self.menu.list_menu()
    }

    /// Validates `payload` and stores it under a freshly assigned ID.
    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: &Value) -> Result<Order, OrderError> {
        debug!(?payload, "create_order called");
        let draft = validate_order(payload, &self.menu).inspect_err(|errors| {
            warn!(%errors, "Rejected order payload");
        })?;

        let order = self.inner.create(draft).await.map_err(Self::map_error)?;
        info!(order_id = %order.order_id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Replaces every field of an existing order with a validated `payload`.
    ///
    /// The payload is validated first, so an invalid payload is reported as a validation error
    /// even when `id` does not exist.
    #[instrument(skip(self, payload))]
    pub async fn update_order(&self, id: OrderId, payload: &Value) -> Result<Order, OrderError> {
        debug!(?payload, "update_order called");
        let draft = validate_order(payload, &self.menu)?;
        self.inner
            .update(id, OrderUpdate::Replace(draft))
            .await
            .map_err(Self::map_error)
    }

    /// Merges a partial payload into an existing order.
    ///
    /// The store merges and validates the result as one step, so no other request can change
    /// the order in between. On failure the order is unchanged.
    #[instrument(skip(self, patch))]
    pub async fn patch_order(&self, id: OrderId, patch: Value) -> Result<Order, OrderError> {
        debug!(?patch, "patch_order called");
        self.inner
            .update(id, OrderUpdate::Merge(patch))
            .await
            .map_err(Self::map_error)
    }

    /// Moves an order along the delivery flow, refusing illegal jumps.
    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: OrderId, next: OrderStatus) -> Result<Order, OrderError> {
        self.inner
            .perform_action(id, OrderAction::AdvanceStatus(next))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::IdsExhausted => OrderError::IdsExhausted,
            FrameworkError::NotFound(id) => match id.parse() {
                Ok(raw) => OrderError::NotFound(OrderId(raw)),
                Err(_) => OrderError::ActorCommunicationError(format!("Item not found: {}", id)),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
