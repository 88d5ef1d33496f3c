//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Bodega Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  apps/cli (console loop)                  │  │
//! │  │   menu dispatch ──► render tables ──► prompt & read       │  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │                                │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │             ★ bodega-core (THIS CRATE) ★                  │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────────────┐  │  │
//! │  │  │  money  │ │  types  │ │ catalog │ │ cart / session  │  │  │
//! │  │  │  Money  │ │ Product │ │ lookup  │ │ merge, checkout │  │  │
//! │  │  │         │ │  Order  │ │ by id   │ │ order history   │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────────────┘  │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO TERMINAL • PURE FUNCTIONS                   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - The fixed product catalog and id lookup
//! - [`cart`] - The active shopping cart (merge-on-add, totals)
//! - [`session`] - Cart + order history ownership, checkout transition
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Terminal, file system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{Catalog, Session};
//!
//! let catalog = Catalog::demo();
//! let mut session = Session::new();
//!
//! let product = catalog.find("ABC123").unwrap();
//! session.add_to_cart(product, 2).unwrap();
//!
//! let order = session.checkout().unwrap();
//! assert_eq!(order.id, 1);
//! assert_eq!(order.total().cents(), 10_000); // $100.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::Session;
pub use types::{CartLine, Order, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transaction sizes reasonable.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
