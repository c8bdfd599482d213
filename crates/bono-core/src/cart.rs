//! # Cart
//!
//! The quantity map and its derived total.
//!
//! ## Invariants
//! - There is exactly one quantity per catalog item (the key set never
//!   shrinks or grows)
//! - Every quantity is in `[0, 100]`
//! - `total == Σ(unit_price × quantity)` after every update; the total is
//!   recomputed over the whole catalog rather than adjusted incrementally
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end              Cart                       Derived              │
//! │  ─────────              ────                       ───────              │
//! │                                                                         │
//! │  set 1 "2" ───────────► set_quantity(1, "2") ────► quantities[0] = 2    │
//! │                                │                                        │
//! │                                └─────────────────► total = Σ(p × q)     │
//! │                                                                         │
//! │  show ────────────────► lines() ─────────────────► 4 × QuantityLine     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{catalog_index, CatalogItem, CATALOG, CATALOG_LEN};
use crate::validation::{coerce_quantity, validate_item_id};

/// Requested quantities for the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    /// Indexed like [`CATALOG`].
    quantities: [u32; CATALOG_LEN],

    /// Cached `Σ(unit_price × quantity)`.
    total: Money,
}

/// One row of the quantity table, as the front end draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuantityLine {
    pub item_id: u32,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl Cart {
    /// Creates a cart with every quantity at zero.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Stores the coerced quantity for `item_id` and recomputes the total.
    ///
    /// ## Returns
    /// The quantity actually stored (after coercion and clamping).
    ///
    /// ## Errors
    /// `CoreError::UnknownItem` if `item_id` is not in the catalog. Bad
    /// quantity text is not an error.
    pub fn set_quantity(&mut self, item_id: u32, raw_value: &str) -> CoreResult<u32> {
        let item = validate_item_id(item_id)?;
        let quantity = coerce_quantity(raw_value);

        if let Some(index) = catalog_index(item.id) {
            self.quantities[index] = quantity;
        }
        self.recompute_total();

        Ok(quantity)
    }

    /// Current quantity of an item (0 for ids outside the catalog).
    pub fn quantity(&self, item_id: u32) -> u32 {
        catalog_index(item_id)
            .map(|index| self.quantities[index])
            .unwrap_or(0)
    }

    /// Cached order total.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Checks if nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|&q| q == 0)
    }

    /// Catalog items paired with their quantity, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static CatalogItem, u32)> + '_ {
        CATALOG.iter().zip(self.quantities.iter().copied())
    }

    /// Only the entries with a quantity above zero, in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = (&'static CatalogItem, u32)> + '_ {
        self.entries().filter(|(_, quantity)| *quantity > 0)
    }

    /// Rows for the quantity table (always one per catalog item).
    pub fn lines(&self) -> Vec<QuantityLine> {
        self.entries()
            .map(|(item, quantity)| QuantityLine {
                item_id: item.id,
                name: item.name.to_string(),
                unit_price: item.unit_price,
                quantity,
                subtotal: item.unit_price.multiply_quantity(quantity),
            })
            .collect()
    }

    /// Sets every quantity back to zero.
    pub fn clear(&mut self) {
        self.quantities = [0; CATALOG_LEN];
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self
            .entries()
            .map(|(item, quantity)| item.unit_price.multiply_quantity(quantity))
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn expected_total(cart: &Cart) -> Money {
        CATALOG
            .iter()
            .map(|item| item.unit_price.multiply_quantity(cart.quantity(item.id)))
            .sum()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.lines().len(), CATALOG.len());
    }

    #[test]
    fn test_set_quantity_updates_total() {
        let mut cart = Cart::new();

        assert_eq!(cart.set_quantity(1, "2").unwrap(), 2);
        assert_eq!(cart.total(), Money::from_major(28_000));

        cart.set_quantity(4, "1").unwrap();
        assert_eq!(cart.total(), Money::from_major(46_000));

        cart.set_quantity(1, "0").unwrap();
        assert_eq!(cart.total(), Money::from_major(18_000));
    }

    #[test]
    fn test_set_quantity_coerces_input() {
        let mut cart = Cart::new();

        assert_eq!(cart.set_quantity(2, "500").unwrap(), 100);
        assert_eq!(cart.set_quantity(3, "abc").unwrap(), 0);
        assert_eq!(cart.quantity(2), 100);
        assert_eq!(cart.total(), Money::from_major(2_100_000));
    }

    #[test]
    fn test_unknown_item_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.set_quantity(1, "3").unwrap();
        let before = cart.clone();

        assert_eq!(cart.set_quantity(99, "5"), Err(CoreError::UnknownItem(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_tracks_any_update_sequence() {
        let mut cart = Cart::new();
        let updates = [
            (1, "5"),
            (2, "7"),
            (3, "-2"),
            (4, "100"),
            (2, "x"),
            (1, "250"),
            (3, "12.5"),
            (4, ""),
        ];

        for (id, raw) in updates {
            cart.set_quantity(id, raw).unwrap();
            assert_eq!(cart.total(), expected_total(&cart));
        }
    }

    #[test]
    fn test_selected_keeps_catalog_order() {
        let mut cart = Cart::new();
        cart.set_quantity(4, "1").unwrap();
        cart.set_quantity(2, "3").unwrap();

        let ids: Vec<u32> = cart.selected().map(|(item, _)| item.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.set_quantity(1, "2").unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }
}
