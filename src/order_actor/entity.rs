//! [`ActorEntity`] implementation that turns the generic resource actor into the order store.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::menu::MenuCatalog;
use crate::model::{Order, OrderDraft, OrderId, OrderUpdate};
use crate::validation::{merge_payload, validate_order};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    /// The menu, needed to validate merged partial updates inside the store.
    type Context = Arc<MenuCatalog>;
    type Error = OrderError;

    /// Drafts are validated before they reach the store, so this cannot fail.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        Ok(Order::new(id, draft))
    }

    /// Applies a replacement or a merged partial update.
    ///
    /// A merge is validated as a complete order against the menu; on failure the stored order
    /// is left as it was.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        menu: &Arc<MenuCatalog>,
    ) -> Result<(), Self::Error> {
        let draft = match update {
            OrderUpdate::Replace(draft) => draft,
            OrderUpdate::Merge(patch) => {
                let merged = merge_payload(self, &patch)?;
                let mut draft = validate_order(&merged, menu)?;
                // The merged JSON carries the total as a float; keep the exact stored value.
                if patch.get("total").is_none() {
                    draft.total = self.total;
                }
                draft
            }
        };
        debug!(order_id = %self.order_id, from = %self.status, to = %draft.status, "Replacing order fields");
        self.replace_with(draft);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _menu: &Arc<MenuCatalog>,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::AdvanceStatus(next) => {
                if !self.status.can_transition_to(next) {
                    return Err(OrderError::IllegalTransition {
                        id: self.order_id,
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                Ok(self.clone())
            }
        }
    }
}
