//! Generic resource actor.
//!
//! The building blocks for keeping a collection of entities inside a single tokio task and
//! talking to it through typed messages.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - The task that owns the store and the ID counter
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Plumbing errors (closed actor, missing item, entity failure)
//!
//! # Testing
//!
//! See the [`mock`] module for testing clients without spawning the actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
