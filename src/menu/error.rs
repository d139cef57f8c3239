//! Error types for the menu catalog.

use thiserror::Error;

/// Errors that can occur while building or querying the menu.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// No menu item carries this name.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A menu item breaks an invariant (empty name, missing or repeated sizes, non-positive price).
    #[error("Invalid menu item '{name}': {reason}")]
    InvalidItem { name: String, reason: String },

    /// Two menu items share a name.
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),

    /// The catalog has no items at all.
    #[error("Menu is empty")]
    Empty,
}
