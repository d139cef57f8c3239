//! # System Lifecycle
//!
//! Starts the order store, wires the menu into it and into the client, and shuts everything
//! down again.
//!
//! ## Wiring
//!
//! The menu is built first, from [`Config`](crate::config::Config). The store actor is created
//! without dependencies and receives the menu through `run(context)`, the same `Arc` the
//! [`OrderClient`](crate::clients::OrderClient) validates against.
//!
//! ## Graceful Shutdown
//!
//! 1. Drop every client, which closes the actor's channel.
//! 2. The actor sees `recv()` return `None`, logs its final size and exits.
//! 3. [`PizzaSystem::shutdown`] awaits the task.
//!
//! Clones of the client held elsewhere keep the store alive until they are dropped too.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`] module.

pub mod pizza_system;
pub mod tracing;

pub use pizza_system::*;
pub use tracing::*;
