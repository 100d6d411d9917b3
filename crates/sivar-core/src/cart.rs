//! # Cart
//!
//! The shopping cart for the current session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Option             Cart Method              State Change         │
//! │  ────────────             ───────────              ────────────         │
//! │                                                                         │
//! │  2) Add ─────────────────► add_item() ───────────► push or qty += n     │
//! │                                                                         │
//! │  4) Remove (all) ────────► remove_by_id() ───────► items.remove(i)      │
//! │                                                                         │
//! │  4) Remove (n units) ────► reduce_quantity() ────► qty -= n, or remove  │
//! │                                                                         │
//! │  6) Clear / checkout ────► clear() ──────────────► items.clear()        │
//! │                                                                         │
//! │  3) View ────────────────► items(), total() ─────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

/// A product line in the cart.
///
/// The product is shared with the catalog; only the quantity belongs to the
/// line. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    product: Arc<Product>,
    quantity: i64,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total (unit price × quantity), exact.
    pub fn line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product increases quantity)
/// - Quantity is always > 0 (a line that would drop to 0 is removed)
/// - Insertion order is preserved
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `InvalidQuantity` if the line would exceed [`MAX_ITEM_QUANTITY`];
    ///   the cart is left unchanged
    pub fn add_item(&mut self, product: &Arc<Product>, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::invalid_quantity("quantity must be positive"));
        }

        let too_large = || {
            CoreError::invalid_quantity(format!(
                "line quantity cannot exceed {MAX_ITEM_QUANTITY}"
            ))
        };

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id() == product.id()) {
            let new_qty = item
                .quantity
                .checked_add(quantity)
                .filter(|&q| q <= MAX_ITEM_QUANTITY)
                .ok_or_else(too_large)?;
            item.quantity = new_qty;
            debug!(product_id = %product.id(), quantity = item.quantity, "Cart line increased");
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(too_large());
        }

        self.items.push(CartItem {
            product: Arc::clone(product),
            quantity,
        });
        debug!(product_id = %product.id(), quantity, "Cart line added");
        Ok(())
    }

    /// Removes the line for `product_id` (case-insensitive).
    ///
    /// Returns `false` and leaves the cart untouched if no line matches.
    pub fn remove_by_id(&mut self, product_id: &str) -> bool {
        let product_id = product_id.trim();
        match self.position(product_id) {
            Some(i) => {
                let removed = self.items.remove(i);
                debug!(product_id = %removed.product.id(), "Cart line removed");
                true
            }
            None => false,
        }
    }

    /// Lowers the quantity of the line for `product_id` (case-insensitive).
    ///
    /// ## Returns
    /// - `Some(remaining)` where `remaining == 0` means the line was removed
    /// - `None` if no line matches
    ///
    /// ## Errors
    /// `InvalidQuantity` if `quantity <= 0`.
    pub fn reduce_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<Option<i64>> {
        if quantity <= 0 {
            return Err(CoreError::invalid_quantity("quantity must be positive"));
        }

        let Some(i) = self.position(product_id.trim()) else {
            return Ok(None);
        };

        let remaining = self.items[i].quantity - quantity;
        if remaining <= 0 {
            self.items.remove(i);
            debug!(product_id = %product_id, "Cart line reduced to zero and removed");
            return Ok(Some(0));
        }

        self.items[i].quantity = remaining;
        debug!(product_id = %product_id, remaining, "Cart line reduced");
        Ok(Some(remaining))
    }

    /// Read-only view of the lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Exact sum of all line totals. Never rounded here.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.product.id().eq_ignore_ascii_case(product_id))
    }
}
