//! Command-line flags.
//!
//! Flags take precedence over the environment, the config file and the
//! built-in defaults (see [`crate::state::ConfigState::load`]).

use std::path::PathBuf;

use clap::Parser;
use sivar_core::TaxRate;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sivar-pos",
    about = "Sivar Market point-of-sale console",
    long_about = None
)]
pub struct Cli {
    /// JSON config file; every field is optional
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store name printed at the top of every invoice
    #[arg(long)]
    pub store_name: Option<String>,

    /// Sales tax rate, as a fraction ("0.13") or a percentage ("13%")
    #[arg(long, value_name = "RATE")]
    pub tax_rate: Option<TaxRate>,

    /// Directory where invoice files are written
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
