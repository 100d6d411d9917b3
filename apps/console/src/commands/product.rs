//! # Product Commands
//!
//! Catalog listing for menu option 1.

use serde::Serialize;
use sivar_core::{Money, Product};
use tracing::debug;

use crate::state::{AppState, ConfigState};

/// Product row as shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id().to_string(),
            name: p.name().to_string(),
            unit_price: p.unit_price(),
        }
    }
}

/// Lists every product in catalog order.
pub fn list_products(state: &AppState) -> Vec<ProductDto> {
    debug!(count = state.catalog.len(), "list_products command");
    state
        .catalog
        .iter()
        .map(|p| ProductDto::from(&**p))
        .collect()
}

/// Formats the listing as an id / name / price table.
pub fn format_product_list(products: &[ProductDto], config: &ConfigState) -> String {
    let mut out = format!("{:<6} {:<28} {:>10}\n", "ID", "Product", "Price");
    for p in products {
        out.push_str(&format!(
            "{:<6} {:<28} {:>10}\n",
            p.id,
            p.name,
            config.format_currency(p.unit_price)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_in_catalog_order() {
        let state = AppState::new(ConfigState::default());
        let products = list_products(&state);

        assert_eq!(products.len(), 25);
        assert_eq!(products[0].id, "P001");
        assert_eq!(products[0].name, "Café 250g");
        assert_eq!(products[0].unit_price, Money::from_cents(350));
        assert_eq!(products[24].id, "P025");
    }

    #[test]
    fn test_format_product_list() {
        let state = AppState::new(ConfigState::default());
        let text = format_product_list(&list_products(&state), &state.config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 26);
        assert!(lines[1].starts_with("P001"));
        assert!(lines[1].contains("Café 250g"));
        assert!(lines[1].ends_with("$3.50"));
    }
}
