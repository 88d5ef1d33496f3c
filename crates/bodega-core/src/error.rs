//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  bodega-core errors (this file)                                 │
//! │  ├── CoreError        - General domain errors                   │
//! │  └── ValidationError  - Input validation failures               │
//! │                                                                 │
//! │  apps/cli                                                       │
//! │  └── every CoreError becomes a user-facing console message      │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → printed to the user        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// The console front end catches them and prints their messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog.
    ///
    /// ## When This Occurs
    /// - User typed an id that is not in the fixed catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was attempted while the cart held no lines.
    ///
    /// ## When This Occurs
    /// - Checkout on a fresh session
    /// - Checkout immediately after a successful checkout cleared the cart
    ///
    /// No state changes when this is returned: the order history keeps its
    /// length and the cart stays empty.
    #[error("Shopping cart is empty. Cannot checkout.")]
    EmptyCart,

    /// Cart has exceeded maximum allowed unique lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad characters in a product id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product id in the catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("XYZ999".to_string());
        assert_eq!(err.to_string(), "Product not found: XYZ999");

        let err = CoreError::EmptyCart;
        assert_eq!(err.to_string(), "Shopping cart is empty. Cannot checkout.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
