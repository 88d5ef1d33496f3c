//! # Catalog Module
//!
//! The fixed, read-only list of purchasable products.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Startup                                                        │
//! │     │                                                           │
//! │     ▼                                                           │
//! │  Catalog::new(products) ── validates every entry,               │
//! │     │                      rejects duplicate ids                │
//! │     ▼                                                           │
//! │  Lives for the process lifetime, never mutated                  │
//! │     │                                                           │
//! │     ▼                                                           │
//! │  find(id) ── linear scan lookup (the catalog is 5 items)        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_id, validate_product_name};

/// The fixed product catalog.
///
/// ## Invariant
/// Product ids are unique within the catalog; enforced at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a list of products.
    ///
    /// Every product is validated (well-formed id and name, non-negative
    /// price) and duplicate ids are rejected.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (index, product) in products.iter().enumerate() {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            validate_price_cents(product.price_cents)?;

            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The demo catalog: the fixed five products the simulator starts with.
    pub fn demo() -> Self {
        // Validated by construction, so the expect is unreachable
        Catalog::new(vec![
            Product::new("ABC123", "50 dias", 5000, "50 + 5 dias"),
            Product::new("DEF456", "100 dias", 9800, "100 + 10 dias"),
            Product::new("GHI789", "250", 23_000, "250 + 30 dias"),
            Product::new("JKL012", "Starlight", 30_000, "1 Starlight Card"),
            Product::new("MNO345", "500 dias", 50_000, "500 + 50 dias"),
        ])
        .expect("demo catalog is statically valid")
    }

    /// Looks up a product by its business id.
    ///
    /// Linear scan: the catalog is a handful of items.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns all products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
