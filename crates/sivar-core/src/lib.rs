//! # sivar-core: Pure Business Logic for Sivar Market
//!
//! Catalog, cart, invoice math and invoice text layout. No file, terminal or
//! network access happens in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sivar Market Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                apps/console (interactive shell)                 │   │
//! │  │      list ──► add ──► view ──► remove ──► checkout ──► clear    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sivar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │ invoice │ │ receipt │ │  money  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ rendered text + file name              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                sivar-store (invoice .txt files)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Customer, TaxRate
//! - [`money`] - Exact decimal money with half-up rounding
//! - [`catalog`] - The demo product table
//! - [`cart`] - Session cart
//! - [`invoice`] - Cart snapshot with subtotal, tax and total
//! - [`receipt`] - Plain-text invoice layout
//! - [`validation`] - Field rules for products, quantities and customers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sivar_core::{render_plain_text, Cart, Catalog, Customer, Invoice, TaxRate};
//!
//! let at = NaiveDate::from_ymd_opt(2026, 10, 16)
//!     .and_then(|d| d.and_hms_opt(9, 30, 0))
//!     .unwrap();
//!
//! let catalog = Catalog::demo();
//! let mut cart = Cart::new();
//! cart.add_item(catalog.get("P001").unwrap(), 2).unwrap();
//!
//! let customer = Customer::new("Ana", "ana@example.com", "01234567-8", "Calle 1", at).unwrap();
//! let invoice = Invoice::from_cart_at(customer, &cart, TaxRate::from_bps(1300), at);
//!
//! assert_eq!(invoice.total().to_string(), "7.91");
//! assert_eq!(invoice.file_name(), "FACT-20261016-093000.txt");
//! assert!(render_plain_text(&invoice, "TIENDA SIVAR MARKET").contains("TOTAL:"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceTotals};
pub use money::Money;
pub use receipt::render_plain_text;
pub use types::{Customer, Product, TaxRate};

/// Default sales tax rate in basis points (13%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 1300;

/// Maximum quantity of a single product line in the cart.
///
/// Catches typos such as `1000` for `10` at the counter.
pub const MAX_ITEM_QUANTITY: i64 = 999;
