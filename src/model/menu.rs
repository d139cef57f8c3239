//! Menu data: pizza sizes and menu items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Size options a pizza can be ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    /// Amount added to an item's base price for this size.
    ///
    /// Each step up from Small costs 2.00 more.
    pub fn surcharge(self) -> Decimal {
        match self {
            PizzaSize::Small => Decimal::ZERO,
            PizzaSize::Medium => Decimal::new(200, 2),
            PizzaSize::Large => Decimal::new(400, 2),
        }
    }
}

impl Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        };
        f.write_str(name)
    }
}

impl FromStr for PizzaSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PizzaSize::ALL
            .into_iter()
            .find(|size| size.to_string() == s)
            .ok_or_else(|| format!("unknown size '{}'", s))
    }
}

/// A pizza offered on the menu.
///
/// Menu items are built once at startup (from the built-in menu or a config file) and never
/// change afterwards. See [`MenuCatalog`](crate::menu::MenuCatalog) for the invariants enforced
/// on a whole menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(alias = "available_sizes")]
    pub available_sizes: Vec<PizzaSize>,
    #[serde(alias = "base_price", with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
}

impl MenuItem {
    /// Creates a menu item. Invariants are checked when the item joins a catalog.
    pub fn new(name: impl Into<String>, available_sizes: Vec<PizzaSize>, base_price: Decimal) -> Self {
        Self {
            name: name.into(),
            available_sizes,
            base_price,
        }
    }

    pub fn offers(&self, size: PizzaSize) -> bool {
        self.available_sizes.contains(&size)
    }

    /// List price of one pizza in `size`, or `None` if this item is not sold in that size.
    pub fn price_for(&self, size: PizzaSize) -> Option<Decimal> {
        self.offers(size).then(|| self.base_price + size.surcharge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_names_round_trip_through_from_str() {
        for size in PizzaSize::ALL {
            assert_eq!(size.to_string().parse::<PizzaSize>(), Ok(size));
        }
        assert!("large".parse::<PizzaSize>().is_err());
        assert!("XL".parse::<PizzaSize>().is_err());
    }

    #[test]
    fn test_price_for_adds_size_surcharge() {
        let item = MenuItem::new(
            "Margherita",
            vec![PizzaSize::Small, PizzaSize::Large],
            Decimal::new(750, 2),
        );
        assert_eq!(item.price_for(PizzaSize::Small), Some(Decimal::new(750, 2)));
        assert_eq!(item.price_for(PizzaSize::Large), Some(Decimal::new(1150, 2)));
        assert_eq!(item.price_for(PizzaSize::Medium), None);
    }

    #[test]
    fn test_menu_item_serializes_camel_case_with_numeric_price() {
        let item = MenuItem::new("Veggie", vec![PizzaSize::Medium], Decimal::new(775, 2));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Veggie",
                "availableSizes": ["Medium"],
                "basePrice": 7.75
            })
        );
    }
}
