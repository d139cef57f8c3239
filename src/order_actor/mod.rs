//! # Order Store
//!
//! The order store is a [`ResourceActor<Order>`](crate::framework::ResourceActor): one tokio
//! task owning the map of live orders and the ID counter.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`], the error type every order operation returns
//! - [`actions`] - [`OrderAction`], the guarded status change
//! - [`new()`] - Factory that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_orders::clients::OrderClient;
//! use pizza_orders::menu::MenuCatalog;
//! use pizza_orders::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let menu = Arc::new(MenuCatalog::default());
//!     let (actor, generic_client) = order_actor::new(32, 1001);
//!     tokio::spawn(actor.run(menu.clone()));
//!
//!     let client = OrderClient::new(generic_client, menu);
//!     let order = client
//!         .create_order(&serde_json::json!({
//!             "customer": "Alice",
//!             "address": "123 Main St",
//!             "items": [{"pizza": "Veggie", "size": "Small", "quantity": 1}],
//!             "total": 7.75
//!         }))
//!         .await?;
//!     assert_eq!(order.order_id.0, 1001);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates the order store actor and its generic client.
///
/// `first_order_id` is the ID handed to the first order; every later order gets a larger one.
pub fn new(buffer_size: usize, first_order_id: u32) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, first_order_id)
}
