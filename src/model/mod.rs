//! Pure data structures shared by the menu catalog, the validator and the order store.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
