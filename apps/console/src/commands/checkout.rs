//! # Checkout Command
//!
//! Menu option 5.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  ensure_cart_not_empty ──✗──► EMPTY_CART (no prompts, no file)         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  shell prompts name / national id / email / address                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  checkout(customer, issued_at)                                         │
//! │    1. Invoice::from_cart_at   (snapshot + rounding)                    │
//! │    2. render_plain_text       (store name from config)                 │
//! │    3. InvoiceStore::save_invoice ──✗──► saved = Err(..), text kept     │
//! │    4. cart.clear()                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use chrono::NaiveDateTime;
use sivar_core::{render_plain_text, CoreError, Customer, Invoice};
use tracing::{info, warn};

use crate::error::ConsoleError;
use crate::state::AppState;

/// Result of a completed checkout.
///
/// The invoice and its text are always present; only `saved` can fail.
#[derive(Debug)]
pub struct CheckoutOutcome {
    pub invoice: Invoice,
    pub text: String,
    pub saved: Result<PathBuf, ConsoleError>,
}

/// Rejects checkout before any customer prompt when there is nothing to sell.
pub fn ensure_cart_not_empty(state: &AppState) -> Result<(), ConsoleError> {
    if state.cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }
    Ok(())
}

/// Builds, renders and saves the invoice, then clears the cart.
///
/// ## Errors
/// `EMPTY_CART` if the cart is empty; no invoice is built and no file is
/// written. A failed save is reported inside [`CheckoutOutcome::saved`].
pub fn checkout(
    state: &mut AppState,
    customer: Customer,
    issued_at: NaiveDateTime,
) -> Result<CheckoutOutcome, ConsoleError> {
    ensure_cart_not_empty(state)?;

    let invoice = Invoice::from_cart_at(customer, &state.cart, state.config.tax_rate, issued_at);
    let text = render_plain_text(&invoice, &state.config.store_name);

    let saved = state
        .store
        .save_invoice(&invoice, &text)
        .map_err(ConsoleError::from);

    match &saved {
        Ok(path) => info!(
            number = %invoice.number(),
            total = %invoice.total(),
            path = %path.display(),
            "Checkout complete"
        ),
        Err(e) => warn!(
            number = %invoice.number(),
            error = %e,
            "Checkout complete, invoice not saved"
        ),
    }

    state.cart.clear();

    Ok(CheckoutOutcome {
        invoice,
        text,
        saved,
    })
}
