//! # Domain Types
//!
//! Core domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌───────────────┐   ┌────────────────┐   ┌──────────────────┐  │
//! │  │   Product     │   │   CartLine     │   │      Order       │  │
//! │  │ ───────────── │   │ ────────────── │   │ ──────────────── │  │
//! │  │ id (business) │──►│ product_id     │──►│ id (1, 2, 3, …)  │  │
//! │  │ name          │   │ name snapshot  │   │ lines (frozen)   │  │
//! │  │ price_cents   │   │ unit price     │   │ total_cents      │  │
//! │  │ description   │   │ quantity       │   │ created_at       │  │
//! │  └───────────────┘   └────────────────┘   └──────────────────┘  │
//! │                                                                 │
//! │  Product is immutable catalog data; CartLine freezes a product  │
//! │  at add-to-cart time; Order freezes the whole cart at checkout. │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available in the fixed catalog.
///
/// Immutable after construction: created once at startup, lives for the
/// process lifetime, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Business identifier, unique within the catalog (e.g. "ABC123").
    pub id: String,

    /// Display name shown in listings and on order details.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Short description shown alongside the name.
    pub description: String,
}

impl Product {
    /// Creates a new catalog entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            description: description.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One (product, quantity) pairing held in the active cart.
///
/// Uses the snapshot pattern: product data is frozen at the moment the line
/// is created, so the cart and any order built from it display consistent
/// data regardless of later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product business id (for merge-on-add matching).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Product description at time of adding (frozen).
    pub description: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. The line keeps it even if the
    /// catalog entry were to change.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity) in cents.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Order
// =============================================================================

/// An immutable snapshot of a completed purchase.
///
/// Constructed only by [`crate::Session::checkout`]. The total is computed
/// once at checkout and stored; it is never recomputed from the lines.
///
/// ## Invariant
/// `total_cents` equals the sum of `line_total_cents()` over `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Monotonic order number, assigned as history-length + 1 (1-based).
    pub id: u32,

    /// Line snapshots copied from the cart at checkout, in insertion order.
    pub lines: Vec<CartLine>,

    /// Order total in cents, computed once at checkout.
    pub total_cents: i64,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the stored order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the number of lines in the order.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
