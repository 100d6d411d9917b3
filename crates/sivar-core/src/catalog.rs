//! # Product Catalog
//!
//! Read-only product lookup table, built once at startup.
//!
//! Products are shared as `Arc<Product>`: the catalog owns them, cart lines
//! and invoices hold references to the same allocation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Demo seed: (id, name, price in cents).
const DEMO_PRODUCTS: &[(&str, &str, i64)] = &[
    ("P001", "Café 250g", 350),
    ("P002", "Azúcar 1kg", 125),
    ("P003", "Arroz 2lb", 190),
    ("P004", "Aceite 1lt", 310),
    ("P005", "Leche 1lt", 145),
    ("P006", "Pan blanco 500g", 110),
    ("P007", "Huevos docena", 250),
    ("P008", "Harina de trigo 1kg", 170),
    ("P009", "Sal 500g", 60),
    ("P010", "Fideos espagueti 400g", 120),
    ("P011", "Atún en agua 140g", 135),
    ("P012", "Sardinas 155g", 110),
    ("P013", "Galletas surtidas 300g", 230),
    ("P014", "Jugo de naranja 1lt", 200),
    ("P015", "Refresco cola 2lt", 185),
    ("P016", "Agua embotellada 1lt", 85),
    ("P017", "Mantequilla 250g", 195),
    ("P018", "Queso fresco 1lb", 320),
    ("P019", "Jamón 200g", 275),
    ("P020", "Papel higiénico 4 rollos", 260),
    ("P021", "Detergente 1kg", 340),
    ("P022", "Jabón de baño 3 unidades", 210),
    ("P023", "Shampoo 400ml", 390),
    ("P024", "Pasta dental 90g", 175),
    ("P025", "Desodorante 150ml", 315),
];

/// Insertion-ordered product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// ## Errors
    /// `ValidationError::Duplicate` if two products share an id.
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, ValidationError> {
        let mut catalog = Catalog::default();

        for product in products {
            if catalog.index.contains_key(product.id()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id().to_string(),
                });
            }
            catalog
                .index
                .insert(product.id().to_string(), catalog.products.len());
            catalog.products.push(Arc::new(product));
        }

        debug!(count = catalog.products.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The fixed 25-product demo catalog (`P001`..`P025`).
    pub fn demo() -> Self {
        let products = DEMO_PRODUCTS.iter().filter_map(|(id, name, cents)| {
            // Checked row by row in test_every_seed_row_is_valid.
            Product::new(*id, *name, Money::from_cents(*cents)).ok()
        });

        Catalog::from_products(products).unwrap_or_default()
    }

    /// Exact-match lookup by product id.
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
