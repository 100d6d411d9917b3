//! # State Module
//!
//! Session state owned by the shell loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   Catalog    │ │     Cart     │ │ ConfigState  │ │ InvoiceStore │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  read-only   │ │  mutated by  │ │  read-only   │ │  output dir  │   │
//! │  │  after start │ │  commands    │ │  after load  │ │  from config │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  One logical actor: the shell owns AppState and lends it to commands.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{
    ConfigError, ConfigState, FileConfig, DEFAULT_STORE_NAME, ENV_OUTPUT_DIR, ENV_STORE_NAME,
    ENV_TAX_RATE,
};

use sivar_core::{Cart, Catalog};
use sivar_store::InvoiceStore;

/// Everything a command may touch.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub config: ConfigState,
    pub store: InvoiceStore,
}

impl AppState {
    /// Demo catalog, empty cart, store rooted at the configured directory.
    pub fn new(config: ConfigState) -> Self {
        Self::with_catalog(config, Catalog::demo())
    }

    pub fn with_catalog(config: ConfigState, catalog: Catalog) -> Self {
        AppState {
            store: InvoiceStore::new(config.output_dir.clone()),
            catalog,
            cart: Cart::new(),
            config,
        }
    }
}
