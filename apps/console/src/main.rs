//! # Sivar Market Console Entry Point
//!
//! ```text
//! $ sivar-pos --tax-rate 13% --output-dir facturas
//! ```
//!
//! The actual setup lives in lib.rs for testability.

use std::io;

use anyhow::Context;
use clap::Parser;
use sivar_console::{init_tracing, AppState, Cli, ConfigState, Shell};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ConfigState::load(&cli).context("failed to load configuration")?;
    info!(
        store = %config.store_name,
        tax_rate = %config.tax_rate,
        output_dir = %config.output_dir.display(),
        "Starting Sivar Market console"
    );

    let state = AppState::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    Shell::new(stdin.lock(), stdout.lock(), state)
        .run()
        .context("terminal I/O failed")?;

    Ok(())
}
