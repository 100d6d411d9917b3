//! # Validation Module
//!
//! Input validation utilities for Sivar Market.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console shell                                                │
//! │  ├── Reads a line, trims it                                            │
//! │  └── Calls THIS MODULE, re-prompts on error                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain constructors (Product::new, Customer::new, Cart)      │
//! │  └── Re-check the same rules, so invalid values never exist            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sivar_core::validation::{parse_quantity, validate_national_id};
//!
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(validate_national_id("01234567-8").is_ok());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PRODUCT_ID_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_ADDRESS_LEN: usize = 300;

// ASCII digits only; `\d` would also accept other scripts' digits.
static RE_NATIONAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}-[0-9]$").unwrap());
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn check_length(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product id (catalog key).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(required("product id"));
    }

    check_length("product id", id, MAX_PRODUCT_ID_LEN)?;

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid_format(
            "product id",
            "must contain only letters, numbers, hyphens, and underscores",
        ));
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("product name"));
    }

    check_length("product name", name, MAX_NAME_LEN)
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Quantity
// =============================================================================

/// Validates a quantity value.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  Cashier enters quantity: 5                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("5") → validate_quantity(5) ← THIS FUNCTION             │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"                │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"      │
/// │       │                                                                 │
/// │       └── OK → Proceed with add_item                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses cashier input as a positive quantity.
///
/// Only ASCII digits are accepted: `"+3"`, `"3.0"` and `"-1"` are rejected as
/// malformed before any range check.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(required("quantity"));
    }

    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_format("quantity", "must be a whole number"));
    }

    let qty: i64 = raw
        .parse()
        .map_err(|_| invalid_format("quantity", "number is too large"))?;

    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates the customer's full name. Required, at most 200 characters.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("name"));
    }

    check_length("name", name, MAX_NAME_LEN)
}

/// Validates a national id in the `########-#` form.
///
/// ## Example
/// ```rust
/// use sivar_core::validation::validate_national_id;
///
/// assert!(validate_national_id("01234567-8").is_ok());
/// assert!(validate_national_id("1234567-8").is_err());
/// assert!(validate_national_id("012345678").is_err());
/// ```
pub fn validate_national_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(required("national id"));
    }

    if !RE_NATIONAL_ID.is_match(id) {
        return Err(invalid_format("national id", "expected ########-#"));
    }

    Ok(())
}

/// Validates an email address in the `local@domain.tld` form.
///
/// One `@`, no whitespace, and a dot inside the domain part
/// (`^[^\s@]+@[^\s@]+\.[^\s@]+$`).
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(required("email"));
    }

    if !RE_EMAIL.is_match(email) {
        return Err(invalid_format("email", "expected local@domain.tld"));
    }

    Ok(())
}

/// Validates the billing address. Required, at most 300 characters.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    let address = address.trim();

    if address.is_empty() {
        return Err(required("address"));
    }

    check_length("address", address, MAX_ADDRESS_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================
