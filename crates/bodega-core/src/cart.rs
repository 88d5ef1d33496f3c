//! # Cart Module
//!
//! The active shopping cart: a mutable, insertion-ordered collection of
//! cart lines with merge-on-add semantics.
//!
//! ## Cart State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Cart State Transitions                        │
//! │                                                                 │
//! │              add_item                add_item (merge or new)    │
//! │   ┌───────┐ ──────────► ┌──────────┐ ──────────┐               │
//! │   │ Empty │             │ NonEmpty │ ◄─────────┘               │
//! │   └───────┘ ◄────────── └──────────┘                           │
//! │       ▲      checkout                                           │
//! │       │      (session.rs)                                       │
//! │       └── checkout while Empty: no-op, reports EmptyCart        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Product};
use crate::validation::validate_quantity;
use crate::MAX_CART_ITEMS;

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges
///   quantities instead of appending a second line)
/// - Every line quantity is positive
/// - At most [`MAX_CART_ITEMS`] unique lines, [`crate::MAX_ITEM_QUANTITY`]
///   per line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Quantity is validated first: must be positive and within the cap
    /// - If the product is already in the cart: its line quantity increases
    /// - If the product is not in the cart: a new snapshot line is appended
    ///
    /// ## Errors
    /// - `Validation` for a non-positive or over-cap quantity
    /// - `Validation(OutOfRange)` if merging would push a line past the cap
    /// - `CartTooLarge` if the cart already holds the maximum unique lines
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        // Merge-on-add: never two lines with the same product id
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            let new_qty = line.quantity + quantity;
            validate_quantity(new_qty)?;
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Calculates the cart total (Σ price × quantity) in cents. Pure.
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Returns the cart total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Consumes the current lines, leaving the cart empty.
    ///
    /// Used by checkout to move the lines into an order without cloning.
    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        self.created_at = Utc::now();
        std::mem::take(&mut self.lines)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents, "test item")
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("ABC123", 5000);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_cents(), 10_000);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let product = test_product("ABC123", 5000);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        // Still one line, quantity summed
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_cents(), 25_000); // $250.00
    }

    #[test]
    fn test_total_across_products() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("DEF456", 9800), 1).unwrap();
        cart.add_item(&test_product("GHI789", 23_000), 1).unwrap();

        assert_eq!(cart.total_cents(), 32_800); // $328.00
        assert_eq!(cart.total().to_string(), "$328.00");
    }

    #[test]
    fn test_total_holds_after_every_add() {
        let mut cart = Cart::new();
        let a = test_product("A1", 150);
        let b = test_product("B2", 75);

        let mut expected = 0;
        for (product, qty) in [(&a, 2), (&b, 1), (&a, 4), (&b, 3)] {
            cart.add_item(product, qty).unwrap();
            expected += product.price_cents * qty;
            let recomputed: i64 = cart
                .lines()
                .iter()
                .map(|l| l.unit_price_cents * l.quantity)
                .sum();
            assert_eq!(cart.total_cents(), recomputed);
            assert_eq!(cart.total_cents(), expected);
        }
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("ABC123", 5000);

        assert!(matches!(
            cart.add_item(&product, 0),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
        assert!(cart.add_item(&product, -3).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_respects_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("ABC123", 5000);

        cart.add_item(&product, 998).unwrap();
        assert!(cart.add_item(&product, 2).is_err());
        // Failed merge leaves the line untouched
        assert_eq!(cart.lines()[0].quantity, 998);
    }

    #[test]
    fn test_cart_size_cap() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_ITEMS {
            cart.add_item(&test_product(&format!("P{}", i), 100), 1)
                .unwrap();
        }

        let overflow = test_product("OVERFLOW", 100);
        assert!(matches!(
            cart.add_item(&overflow, 1),
            Err(CoreError::CartTooLarge { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("ABC123", 5000), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_take_lines_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("ABC123", 5000), 2).unwrap();

        let lines = cart.take_lines();
        assert_eq!(lines.len(), 1);
        assert!(cart.is_empty());
    }
}
