//! # Sivar Console Library
//!
//! Interactive point-of-sale shell for Sivar Market.
//!
//! ## Module Organization
//! ```text
//! sivar_console/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── cli.rs          ◄─── Command-line flags (clap)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState: catalog, cart, config, store
//! │   └── config.rs   ◄─── ConfigState: defaults < file < env < flags
//! ├── commands/
//! │   ├── product.rs  ◄─── List products
//! │   ├── cart.rs     ◄─── Add, view, remove, clear
//! │   └── checkout.rs ◄─── Invoice, render, save
//! ├── shell.rs        ◄─── Menu loop and prompts
//! └── error.rs        ◄─── ConsoleError with stable codes
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (stderr, RUST_LOG, default WARN)                 │
//! │  2. Parse flags, load ConfigState                                       │
//! │  3. Build AppState (demo catalog, empty cart, invoice store)            │
//! │  4. Run the shell on stdin/stdout until 0 or end of input               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use cli::Cli;
pub use error::{ConsoleError, ErrorCode};
pub use shell::Shell;
pub use state::{AppState, ConfigError, ConfigState};

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sivar_core=debug,sivar_console=debug` - Cart and command detail
/// - Default: WARN level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
