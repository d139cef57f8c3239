//! Custom actions for the Order actor.
//!
//! Plain updates may set any status. The action here is the opt-in, guarded way to move an
//! order along its delivery flow; see [`OrderStatus::can_transition_to`].

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to the given status if the flow allows it.
    ///
    /// # Errors
    /// Fails with [`OrderError::IllegalTransition`](crate::order_actor::OrderError::IllegalTransition)
    /// when the current status cannot move to the requested one.
    AdvanceStatus(OrderStatus),
}
