//! # Session Module
//!
//! A shopping session owns both the active cart and the append-only order
//! history, making checkout a clean ownership transfer instead of the cart
//! holding a mutable back-reference into the history.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        checkout()                               │
//! │                                                                 │
//! │  cart empty? ──► yes ──► Err(EmptyCart), nothing changes        │
//! │      │                                                          │
//! │      no                                                         │
//! │      ▼                                                          │
//! │  total = cart.total_cents()          (computed once, stored)    │
//! │  id    = orders.len() + 1            (monotonic, 1-based)       │
//! │  lines = cart lines                  (moved, insertion order)   │
//! │      │                                                          │
//! │      ▼                                                          │
//! │  orders.push(Order { id, lines, total, now })                   │
//! │  cart is now empty                                              │
//! │                                                                 │
//! │  This is the ONLY mutation point for the order history.         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, Product};

/// One user's shopping session: the active cart plus the order history.
///
/// Both live only in process memory and are dropped on exit.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    orders: Vec<Order>,
}

impl Session {
    /// Creates a fresh session with an empty cart and no orders.
    pub fn new() -> Self {
        Session {
            cart: Cart::new(),
            orders: Vec::new(),
        }
    }

    /// Adds a product to the session's cart.
    ///
    /// See [`Cart::add_item`] for merge and validation behavior.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        self.cart.add_item(product, quantity)
    }

    /// Converts the current cart into an order and appends it to history.
    ///
    /// ## Behavior
    /// - Empty cart: `Err(EmptyCart)`, history and cart untouched
    /// - Otherwise: the total is computed once, the new order gets id
    ///   `orders.len() + 1`, the cart's lines move into the order in
    ///   insertion order, and the cart is left empty
    ///
    /// ## Returns
    /// A reference to the freshly placed order.
    pub fn checkout(&mut self) -> CoreResult<&Order> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total_cents = self.cart.total_cents();
        let order = Order {
            id: self.orders.len() as u32 + 1,
            lines: self.cart.take_lines(),
            total_cents,
            created_at: Utc::now(),
        };
        self.orders.push(order);

        // Just pushed, so last() cannot fail
        Ok(self.orders.last().expect("order history is non-empty"))
    }

    /// Returns the active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the active cart mutably.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Returns the order history, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_checkout_empty_cart_is_a_noop() {
        let mut session = Session::new();

        let result = session.checkout();
        assert!(matches!(result, Err(CoreError::EmptyCart)));

        // No order created, history length stays 0
        assert!(session.orders().is_empty());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_checkout_merged_line_scenario() {
        // add ABC123 qty 2 ($50.00), add ABC123 qty 3
        // → one line, quantity 5, total $250.00; checkout → Order #1
        let catalog = Catalog::demo();
        let mut session = Session::new();
        let product = catalog.find("ABC123").unwrap();

        session.add_to_cart(product, 2).unwrap();
        session.add_to_cart(product, 3).unwrap();

        assert_eq!(session.cart().line_count(), 1);
        assert_eq!(session.cart().lines()[0].quantity, 5);
        assert_eq!(session.cart().total_cents(), 25_000);

        let total_before = session.cart().total_cents();
        let order = session.checkout().unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.total_cents, total_before);
        assert_eq!(order.total().to_string(), "$250.00");

        assert!(session.cart().is_empty());
        assert_eq!(session.orders().len(), 1);
    }

    #[test]
    fn test_checkout_preserves_lines_in_order() {
        // DEF456 ×1 ($98.00) + GHI789 ×1 ($230.00) → order total $328.00
        let catalog = Catalog::demo();
        let mut session = Session::new();

        session
            .add_to_cart(catalog.find("DEF456").unwrap(), 1)
            .unwrap();
        session
            .add_to_cart(catalog.find("GHI789").unwrap(), 1)
            .unwrap();

        let order = session.checkout().unwrap();
        assert_eq!(order.total_cents, 32_800);
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.lines[0].product_id, "DEF456");
        assert_eq!(order.lines[1].product_id, "GHI789");
    }

    #[test]
    fn test_order_ids_are_monotonic() {
        let catalog = Catalog::demo();
        let mut session = Session::new();
        let product = catalog.find("ABC123").unwrap();

        for expected_id in 1..=3u32 {
            session.add_to_cart(product, 1).unwrap();
            let order = session.checkout().unwrap();
            assert_eq!(order.id, expected_id);
        }

        assert_eq!(session.orders().len(), 3);
        // History keeps insertion order
        let ids: Vec<u32> = session.orders().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_order_total_matches_sum_of_lines() {
        let catalog = Catalog::demo();
        let mut session = Session::new();

        session
            .add_to_cart(catalog.find("ABC123").unwrap(), 2)
            .unwrap();
        session
            .add_to_cart(catalog.find("JKL012").unwrap(), 1)
            .unwrap();

        let order = session.checkout().unwrap();
        let recomputed: i64 = order.lines.iter().map(|l| l.line_total_cents()).sum();
        assert_eq!(order.total_cents, recomputed);
    }

    #[test]
    fn test_checkout_after_checkout_fails_until_refilled() {
        let catalog = Catalog::demo();
        let mut session = Session::new();
        let product = catalog.find("MNO345").unwrap();

        session.add_to_cart(product, 1).unwrap();
        session.checkout().unwrap();

        // Cart cleared by checkout, second checkout is rejected
        assert!(matches!(session.checkout(), Err(CoreError::EmptyCart)));
        assert_eq!(session.orders().len(), 1);

        session.add_to_cart(product, 1).unwrap();
        let order = session.checkout().unwrap();
        assert_eq!(order.id, 2);
    }
}
