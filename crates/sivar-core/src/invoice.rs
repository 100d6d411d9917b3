//! # Invoice Builder
//!
//! Turns a cart into an immutable, tax-computed invoice.
//!
//! ## Rounding Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw = cart.total()                      (exact, never rounded)        │
//! │                                                                         │
//! │  subtotal = round(raw)                                                 │
//! │  tax      = round(raw × rate)                                          │
//! │  total    = round(raw + raw × rate)      ← NOT subtotal + tax          │
//! │                                                                         │
//! │  raw 1.0045 @ 13%:  subtotal 1.00, tax 0.13, total 1.14                │
//! │                     (adding the rounded figures would give 1.13)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! All rounding is half-up to two fractional digits.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::cart::{Cart, CartItem};
use crate::money::Money;
use crate::types::{Customer, TaxRate};

/// Prefix of every invoice number.
pub const INVOICE_PREFIX: &str = "FACT-";

/// Rounded invoice figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl InvoiceTotals {
    /// Computes subtotal, tax and total from an unrounded amount.
    ///
    /// Tax and total both derive from `raw`, then each figure is rounded on
    /// its own.
    pub fn compute(raw: Money, rate: TaxRate) -> Self {
        let raw_tax = raw.calculate_tax(rate);
        InvoiceTotals {
            subtotal: raw.round_half_up(),
            tax: raw_tax.round_half_up(),
            total: (raw + raw_tax).round_half_up(),
        }
    }
}

/// A finalized sale. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    number: String,
    customer: Customer,
    items: Vec<CartItem>,
    issued_at: NaiveDateTime,
    tax_rate: TaxRate,
    totals: InvoiceTotals,
}

impl Invoice {
    /// Builds an invoice stamped with the current local time.
    pub fn from_cart(customer: Customer, cart: &Cart, tax_rate: TaxRate) -> Self {
        Self::from_cart_at(customer, cart, tax_rate, Local::now().naive_local())
    }

    /// Builds an invoice stamped with `issued_at`.
    ///
    /// The cart's lines are copied, so clearing or editing the cart afterwards
    /// does not touch the invoice. An empty cart yields a zero invoice; the
    /// checkout command rejects that case before getting here.
    pub fn from_cart_at(
        customer: Customer,
        cart: &Cart,
        tax_rate: TaxRate,
        issued_at: NaiveDateTime,
    ) -> Self {
        let items = cart.items().to_vec();
        let totals = InvoiceTotals::compute(cart.total(), tax_rate);
        let number = invoice_number(issued_at);

        debug!(
            number = %number,
            lines = items.len(),
            subtotal = %totals.subtotal,
            tax = %totals.tax,
            total = %totals.total,
            "Invoice built"
        );

        Invoice {
            number,
            customer,
            items,
            issued_at,
            tax_rate,
            totals,
        }
    }

    /// `FACT-<yyyyMMdd-HHmmss>`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// File name the invoice is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.number)
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    pub fn tax(&self) -> Money {
        self.totals.tax
    }

    pub fn total(&self) -> Money {
        self.totals.total
    }
}

/// Formats an invoice number from its timestamp.
pub fn invoice_number(issued_at: NaiveDateTime) -> String {
    format!("{INVOICE_PREFIX}{}", issued_at.format("%Y%m%d-%H%M%S"))
}
