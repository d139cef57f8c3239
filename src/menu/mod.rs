//! # Menu Catalog
//!
//! The fixed, read-only list of pizzas customers can order. A catalog is built once at startup
//! and shared behind an `Arc` by the order client (to validate payloads) and the order store
//! (to validate merged partial updates).
//!
//! ```rust
//! use pizza_orders::menu::MenuCatalog;
//! use pizza_orders::model::PizzaSize;
//!
//! let menu = MenuCatalog::default();
//! let margherita = menu.find_menu_item("Margherita").unwrap();
//! assert!(margherita.offers(PizzaSize::Large));
//! assert!(menu.find_menu_item("margherita").is_err());
//! ```

pub mod error;

pub use error::*;

use crate::model::{MenuItem, OrderItem, PizzaSize};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Builds a catalog, rejecting items that break the menu invariants: non-empty name,
    /// at least one size with no size listed twice, positive base price, unique names.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            let invalid = |reason: &str| MenuError::InvalidItem {
                name: item.name.clone(),
                reason: reason.to_string(),
            };
            if item.name.trim().is_empty() {
                return Err(invalid("name must not be empty"));
            }
            if item.available_sizes.is_empty() {
                return Err(invalid("at least one size must be available"));
            }
            let mut sizes = HashSet::new();
            if !item.available_sizes.iter().all(|size| sizes.insert(*size)) {
                return Err(invalid("available sizes must not repeat"));
            }
            if item.base_price <= Decimal::ZERO {
                return Err(invalid("base price must be positive"));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(MenuError::DuplicateItem(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Every menu item, in menu order.
    pub fn list_menu(&self) -> &[MenuItem] {
        &self.items
    }

    /// Case-sensitive exact lookup by name.
    pub fn find_menu_item(&self, name: &str) -> Result<&MenuItem, MenuError> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| MenuError::NotFound(name.to_string()))
    }

    /// List price of a set of order lines: `price_for(size) * quantity` summed.
    ///
    /// Informational only; the total an order carries is whatever the caller supplied.
    pub fn quote(&self, items: &[OrderItem]) -> Result<Decimal, MenuError> {
        items.iter().try_fold(Decimal::ZERO, |sum, line| {
            let item = self.find_menu_item(&line.pizza)?;
            let unit = item.price_for(line.size).ok_or_else(|| MenuError::InvalidItem {
                name: item.name.clone(),
                reason: format!("not available in size {}", line.size),
            })?;
            Ok(sum + unit * Decimal::from(line.quantity))
        })
    }
}

impl Default for MenuCatalog {
    /// The house menu: five pizzas, every size available.
    fn default() -> Self {
        let all = || PizzaSize::ALL.to_vec();
        Self {
            items: vec![
                MenuItem::new("Margherita", all(), Decimal::new(750, 2)),
                MenuItem::new("Pepperoni", all(), Decimal::new(800, 2)),
                MenuItem::new("Veggie", all(), Decimal::new(775, 2)),
                MenuItem::new("BBQ Chicken", all(), Decimal::new(850, 2)),
                MenuItem::new("Hawaiian", all(), Decimal::new(825, 2)),
            ],
        }
    }
}
