//! # Error Types
//!
//! Domain-specific error types for sivar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sivar-core errors (this file)                                         │
//! │  ├── CoreError        - Cart, catalog and tax rule violations          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  sivar-store errors (separate crate)                                   │
//! │  └── StoreError       - Invoice file write failures                    │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the cashier sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → prompt             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. None of these errors is fatal: the shell reports them and re-prompts

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Cashier typed an id that was never loaded
    /// - Id typed with the wrong case (catalog lookup is exact)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quantity is zero, negative, non-numeric or would overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 0)
    ///      │
    ///      ▼
    /// InvalidQuantity { reason: "must be positive" }
    ///      │
    ///      ▼
    /// Shell shows the message and returns to the menu
    /// ```
    #[error("Invalid quantity: {reason}")]
    InvalidQuantity { reason: String },

    /// Tax rate is negative or not a decimal number.
    #[error("Invalid tax rate '{value}': {reason}")]
    InvalidTaxRate { value: String, reason: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty, nothing to check out")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidQuantity error.
    pub fn invalid_quantity(reason: impl Into<String>) -> Self {
        CoreError::InvalidQuantity {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
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

    /// Invalid format (national id, email, numeric text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product id in a catalog).
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
