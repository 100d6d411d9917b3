//! # Plain-Text Invoice
//!
//! Fixed-width layout used both on screen and in the saved `.txt` file.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TIENDA SIVAR MARKET                                                    │
//! │  Invoice No: FACT-20261016-093000                                       │
//! │  Date: 2026-10-16 09:30                                                 │
//! │  Customer: Ana Pérez  <ana@example.com>                                 │
//! │  National ID: 01234567-8                                                │
//! │  Address: Calle 1, San Salvador                                         │
//! │  ------------------------------------------------------------           │
//! │  Product                      Qty        Price     Subtotal             │
//! │  Café 250g                      2         3.50         7.00             │
//! │  ------------------------------------------------------------           │
//! │                                     SUBTOTAL:         7.00             │
//! │                                          TAX:         0.91             │
//! │                                        TOTAL:         7.91             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Names shorter than the column are padded, longer ones are kept whole.

use std::fmt;

use crate::invoice::Invoice;
use crate::money::Money;

const NAME_WIDTH: usize = 24;
const QTY_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;
const RULE_WIDTH: usize = 60;

/// Renders `invoice` under the `store_name` heading.
pub fn render_plain_text(invoice: &Invoice, store_name: &str) -> String {
    PlainText { invoice, store_name }.to_string()
}

/// `Display` adapter so rows can be written with `writeln!`.
struct PlainText<'a> {
    invoice: &'a Invoice,
    store_name: &'a str,
}

impl fmt::Display for PlainText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invoice = self.invoice;
        let customer = invoice.customer();
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", self.store_name)?;
        writeln!(f, "Invoice No: {}", invoice.number())?;
        writeln!(f, "Date: {}", invoice.issued_at().format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "Customer: {}  <{}>", customer.name(), customer.email())?;
        writeln!(f, "National ID: {}", customer.national_id())?;
        writeln!(f, "Address: {}", customer.address())?;
        writeln!(f, "{rule}")?;

        row(f, "Product", "Qty", "Price", "Subtotal")?;
        for item in invoice.items() {
            row(
                f,
                item.product().name(),
                &item.quantity().to_string(),
                &item.product().unit_price().to_string(),
                &item.line_total().to_string(),
            )?;
        }
        writeln!(f, "{rule}")?;

        summary(f, "SUBTOTAL:", invoice.subtotal())?;
        summary(f, "TAX:", invoice.tax())?;
        summary(f, "TOTAL:", invoice.total())
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    qty: &str,
    price: &str,
    subtotal: &str,
) -> fmt::Result {
    writeln!(
        f,
        "{name:<NAME_WIDTH$} {qty:>QTY_WIDTH$} {price:>AMOUNT_WIDTH$} {subtotal:>AMOUNT_WIDTH$}"
    )
}

fn summary(f: &mut fmt::Formatter<'_>, label: &str, amount: Money) -> fmt::Result {
    row(f, "", "", label, &amount.to_string())
}
