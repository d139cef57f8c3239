//! # Pizza Orders
//!
//! > **An in-memory pizza ordering core built on a resource actor.**
//!
//! Customers pick pizzas from a fixed menu, submit an order payload, and the system validates it,
//! stores it under a fresh numeric ID and lets it be read, listed, updated and deleted.
//!
//! ## 🏗️ Design
//!
//! The order store is a generic [`ResourceActor`](framework::ResourceActor): a single tokio task
//! owning the orders and the ID counter, reached only through message passing. Because the task
//! handles one request at a time, ID assignment, listing order and partial updates need no locks
//! and can never interleave.
//!
//! Validation happens in front of the store, in [`OrderClient`](clients::OrderClient), against
//! the shared [`MenuCatalog`](menu::MenuCatalog). Every broken rule is reported at once as a
//! [`ValidationError`](validation::ValidationError) keyed by field path.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the request enum and [`MockClient`](framework::mock::MockClient)
//! for testing clients without a running store.
//!
//! ### 2. The Data ([`model`], [`menu`], [`validation`])
//! - [`model`]: `Order`, `OrderItem`, `OrderStatus`, `MenuItem`, `PizzaSize`.
//! - [`menu`]: `list_menu` and `find_menu_item`.
//! - [`validation`]: `validate_order`, turning untrusted JSON into an `OrderDraft`.
//!
//! ### 3. The Store ([`order_actor`])
//! The `ActorEntity` implementation for `Order` and the `OrderError` taxonomy.
//!
//! ### 4. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient): `create_order`, `list_orders`, `get_order`,
//! `update_order`, `patch_order`, `advance_status`, `delete_order`.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`PizzaSystem`](lifecycle::PizzaSystem) starts the store from a [`Config`](config::Config)
//! and shuts it down again.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run -- --config pizza.toml
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_actor;
pub mod validation;
