//! # sivar-store: Invoice Persistence for Sivar Market
//!
//! Writes rendered invoice text to `<output-dir>/<invoice-number>.txt`.
//! The only crate in the workspace that touches the filesystem.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sivar_store::InvoiceStore;
//!
//! let store = InvoiceStore::new("facturas");
//! match store.save("FACT-20261016-093000.txt", "...") {
//!     Ok(path) => println!("saved to {}", path.display()),
//!     Err(e) => eprintln!("save failed: {e}"),
//! }
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{InvoiceStore, DEFAULT_OUTPUT_DIR};
