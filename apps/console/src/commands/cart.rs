//! # Cart Commands
//!
//! Menu options 2 (add), 3 (view), 4 (remove) and 6 (clear).
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Customer │────►│ Invoice  │       │
//! │  │  Cart    │     │          │     │ prompts  │     │  saved   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │             │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       │                ▼                                  │             │
//! │       └─────────── clear_cart ◄───────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sivar_core::{Cart, CartItem, CoreError, Money};
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::{AppState, ConfigState};

/// One cart line as shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&CartItem> for CartLineDto {
    fn from(item: &CartItem) -> Self {
        CartLineDto {
            product_id: item.product().id().to_string(),
            name: item.product().name().to_string(),
            quantity: item.quantity(),
            unit_price: item.product().unit_price(),
            line_total: item.line_total(),
        }
    }
}

/// Cart response including items and the unrounded total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartLineDto>,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().iter().map(CartLineDto::from).collect(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

/// What `remove_from_cart` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemoveOutcome {
    /// The whole line is gone.
    Removed,
    /// The line is still there with `remaining` units.
    Reduced { remaining: i64 },
}

/// Gets the current cart contents.
pub fn get_cart(state: &AppState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(&state.cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product id is trimmed, then matched exactly against the catalog
/// - If product already in cart: quantity increases
/// - If product not in cart: appended as a new line
///
/// ## Errors
/// - `NOT_FOUND` for an unknown id
/// - `INVALID_QUANTITY` for `quantity <= 0`, or when the line would pass
///   [`sivar_core::MAX_ITEM_QUANTITY`]
pub fn add_to_cart(
    state: &mut AppState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ConsoleError> {
    let product_id = product_id.trim();
    debug!(product_id = %product_id, quantity, "add_to_cart command");

    let product = state
        .catalog
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    state.cart.add_item(product, quantity)?;
    Ok(CartResponse::from(&state.cart))
}

/// Removes a product from the cart (case-insensitive id).
///
/// ## Behavior
/// - `quantity: None` removes the whole line
/// - `quantity: Some(n)` takes `n` units off; the line goes when it hits zero
///
/// ## Errors
/// - `NOT_FOUND` if no line matches
/// - `INVALID_QUANTITY` for `n <= 0`
pub fn remove_from_cart(
    state: &mut AppState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<RemoveOutcome, ConsoleError> {
    let product_id = product_id.trim();
    debug!(product_id = %product_id, ?quantity, "remove_from_cart command");

    let not_in_cart = || ConsoleError::not_found("Product in cart", product_id);

    match quantity {
        None => {
            if state.cart.remove_by_id(product_id) {
                Ok(RemoveOutcome::Removed)
            } else {
                Err(not_in_cart())
            }
        }
        Some(qty) => match state.cart.reduce_quantity(product_id, qty)? {
            Some(0) => Ok(RemoveOutcome::Removed),
            Some(remaining) => Ok(RemoveOutcome::Reduced { remaining }),
            None => Err(not_in_cart()),
        },
    }
}

/// Clears all items from the cart. Idempotent.
pub fn clear_cart(state: &mut AppState) -> CartResponse {
    debug!(lines = state.cart.len(), "clear_cart command");
    state.cart.clear();
    CartResponse::from(&state.cart)
}

/// Formats the cart for option 3.
pub fn format_cart(cart: &CartResponse, config: &ConfigState) -> String {
    if cart.items.is_empty() {
        return "The cart is empty.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<28} {:>6} {:>10} {:>12}\n",
        "ID", "Product", "Qty", "Price", "Subtotal"
    );
    for line in &cart.items {
        out.push_str(&format!(
            "{:<6} {:<28} {:>6} {:>10} {:>12}\n",
            line.product_id,
            line.name,
            line.quantity,
            config.format_currency(line.unit_price),
            config.format_currency(line.line_total),
        ));
    }
    out.push_str(&format!(
        "Items: {}    Total: {}\n",
        cart.total_quantity,
        config.format_currency(cart.total)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn state() -> AppState {
        AppState::new(ConfigState::default())
    }

    #[test]
    fn test_add_to_cart() {
        let mut state = state();

        let cart = add_to_cart(&mut state, " P001 ", 2).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].line_total, Money::from_cents(700));
        assert_eq!(cart.total, Money::from_cents(700));

        let cart = add_to_cart(&mut state, "P001", 1).unwrap();
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut state = state();

        let err = add_to_cart(&mut state, "P999", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        // Catalog lookup is exact
        let err = add_to_cart(&mut state, "p001", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut state = state();
        let err = add_to_cart(&mut state, "P001", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_add_rejects_line_over_maximum() {
        let mut state = state();
        add_to_cart(&mut state, "P001", 999).unwrap();

        let err = add_to_cart(&mut state, "P001", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(err.message, "Invalid quantity: line quantity cannot exceed 999");

        let cart = add_to_cart(&mut state, "P002", 999).unwrap();
        assert_eq!(cart.total_quantity, 1998);
    }

    #[test]
    fn test_remove_whole_line_case_insensitive() {
        let mut state = state();
        add_to_cart(&mut state, "P001", 2).unwrap();

        assert_eq!(
            remove_from_cart(&mut state, "p001", None).unwrap(),
            RemoveOutcome::Removed
        );
        assert!(get_cart(&state).items.is_empty());

        let err = remove_from_cart(&mut state, "P001", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_remove_some_units() {
        let mut state = state();
        add_to_cart(&mut state, "P002", 5).unwrap();

        assert_eq!(
            remove_from_cart(&mut state, "P002", Some(2)).unwrap(),
            RemoveOutcome::Reduced { remaining: 3 }
        );
        assert_eq!(
            remove_from_cart(&mut state, "P002", Some(10)).unwrap(),
            RemoveOutcome::Removed
        );
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let mut state = state();
        add_to_cart(&mut state, "P001", 1).unwrap();
        add_to_cart(&mut state, "P002", 1).unwrap();

        let cart = clear_cart(&mut state);
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Money::zero());
    }

    #[test]
    fn test_format_cart() {
        let mut state = state();
        assert_eq!(format_cart(&get_cart(&state), &state.config), "The cart is empty.\n");

        add_to_cart(&mut state, "P001", 2).unwrap();
        let text = format_cart(&get_cart(&state), &state.config);

        assert!(text.contains("Café 250g"));
        assert!(text.contains("$7.00"));
        assert!(text.ends_with("Items: 2    Total: $7.00\n"));
    }
}
