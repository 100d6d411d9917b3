//! # Console Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Sivar Market                           │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ConsoleError>                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store Error? ────── StoreError::Write { path, source } ──┐            │
//! │         │                                                  │            │
//! │         ▼                                                  ▼            │
//! │  Domain Error? ───── CoreError::ProductNotFound ──────► ConsoleError   │
//! │         │                                                  │            │
//! │         ▼                                                  ▼            │
//! │  Success                                        shell prints message   │
//! │                                                 and shows the menu     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No `ConsoleError` ends the session.

use std::fmt;

use serde::Serialize;
use sivar_core::{CoreError, ValidationError};
use sivar_store::StoreError;

use crate::state::ConfigError;

/// Error reported back to the shell.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product id, or id not in the cart
    NotFound,

    /// Non-numeric or non-positive quantity
    InvalidQuantity,

    /// Customer field failed its format check
    InvalidFieldFormat,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Invoice file could not be written
    PersistenceFailure,

    /// Startup configuration is invalid
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidQuantity => "INVALID_QUANTITY",
            ErrorCode::InvalidFieldFormat => "INVALID_FIELD_FORMAT",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::PersistenceFailure => "PERSISTENCE_FAILURE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConsoleError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ConsoleError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ConsoleError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates an invalid quantity error.
    pub fn invalid_quantity(message: impl Into<String>) -> Self {
        ConsoleError::new(ErrorCode::InvalidQuantity, message)
    }

    pub fn empty_cart() -> Self {
        ConsoleError::new(ErrorCode::EmptyCart, "The cart is empty.")
    }
}

/// Converts core errors to console errors.
impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ConsoleError::not_found("Product", &id),
            CoreError::InvalidQuantity { reason } => {
                ConsoleError::invalid_quantity(format!("Invalid quantity: {reason}"))
            }
            CoreError::InvalidTaxRate { .. } => {
                ConsoleError::new(ErrorCode::ConfigError, err.to_string())
            }
            CoreError::EmptyCart => ConsoleError::empty_cart(),
            CoreError::Validation(e) => ConsoleError::from(e),
        }
    }
}

/// Quantity rules map to `INVALID_QUANTITY`; everything else is a field format error.
impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Required { field }
                if field == "quantity" =>
            {
                ErrorCode::InvalidQuantity
            }
            _ => ErrorCode::InvalidFieldFormat,
        };
        ConsoleError::new(code, err.to_string())
    }
}

impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        ConsoleError::new(
            ErrorCode::PersistenceFailure,
            format!("Could not save invoice: {err}"),
        )
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConsoleError {}
