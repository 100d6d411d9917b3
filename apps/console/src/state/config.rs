//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lowest                                                      highest   │
//! │                                                                         │
//! │  defaults ──► --config file.json ──► SIVAR_* env ──► --flags           │
//! │                                                                         │
//! │  store_name   TIENDA SIVAR MARKET    "store_name"   SIVAR_STORE_NAME   │
//! │  tax_rate     0.13                   "tax_rate"     SIVAR_TAX_RATE     │
//! │  output_dir   facturas               "output_dir"   SIVAR_OUTPUT_DIR   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Configuration is read-only once the shell starts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sivar_core::{Money, TaxRate, DEFAULT_TAX_RATE_BPS};
use sivar_store::DEFAULT_OUTPUT_DIR;
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;

pub const DEFAULT_STORE_NAME: &str = "TIENDA SIVAR MARKET";

pub const ENV_STORE_NAME: &str = "SIVAR_STORE_NAME";
pub const ENV_TAX_RATE: &str = "SIVAR_TAX_RATE";
pub const ENV_OUTPUT_DIR: &str = "SIVAR_OUTPUT_DIR";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigState {
    /// Store name (printed on invoices)
    pub store_name: String,

    /// Sales tax applied at checkout
    pub tax_rate: TaxRate,

    /// Where invoice files go
    pub output_dir: PathBuf,

    /// Currency symbol (product listing and cart view only)
    pub currency_symbol: String,
}

/// Shape of the optional JSON config file.
///
/// ```json
/// { "store_name": "Tienda Centro", "tax_rate": "0.13", "output_dir": "facturas" }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub store_name: Option<String>,
    pub tax_rate: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub currency_symbol: Option<String>,
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "TIENDA SIVAR MARKET"
    /// - Tax: 13%
    /// - Output: `facturas/` under the working directory
    /// - Currency: $
    fn default() -> Self {
        ConfigState {
            store_name: DEFAULT_STORE_NAME.to_string(),
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from every source, reading the process environment.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::load`] with an injectable environment lookup.
    pub fn load_with(
        cli: &Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = ConfigState::default();

        if let Some(path) = &cli.config {
            config.apply_file(read_file_config(path)?)?;
        }
        config.apply_env(env)?;
        config.apply_cli(cli);

        debug!(
            store_name = %config.store_name,
            tax_rate = %config.tax_rate,
            output_dir = %config.output_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(store_name) = file.store_name {
            self.store_name = store_name;
        }
        if let Some(rate) = file.tax_rate {
            self.tax_rate = parse_tax_rate("tax_rate", &rate)?;
        }
        if let Some(output_dir) = file.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(symbol) = file.currency_symbol {
            self.currency_symbol = symbol;
        }
        Ok(())
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(store_name) = env(ENV_STORE_NAME) {
            self.store_name = store_name;
        }
        if let Some(rate) = env(ENV_TAX_RATE) {
            self.tax_rate = parse_tax_rate(ENV_TAX_RATE, &rate)?;
        }
        if let Some(output_dir) = env(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(output_dir);
        }
        Ok(())
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(store_name) = &cli.store_name {
            self.store_name = store_name.clone();
        }
        if let Some(rate) = cli.tax_rate {
            self.tax_rate = rate;
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(350)), "$3.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        if amount.is_negative() {
            format!("-{}{}", self.currency_symbol, Money::zero() - amount)
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_tax_rate(key: &str, raw: &str) -> Result<TaxRate, ConfigError> {
    raw.parse().map_err(|e: sivar_core::CoreError| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("sivar.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::load_with(&Cli::default(), no_env).unwrap();
        assert_eq!(config.store_name, "TIENDA SIVAR MARKET");
        assert_eq!(config.tax_rate, TaxRate::from_bps(1300));
        assert_eq!(config.output_dir, PathBuf::from("facturas"));
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{ "store_name": "Tienda Centro", "tax_rate": "15%", "currency_symbol": "Q" }"#,
        );
        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };

        let config = ConfigState::load_with(&cli, no_env).unwrap();
        assert_eq!(config.store_name, "Tienda Centro");
        assert_eq!(config.tax_rate, TaxRate::from_bps(1500));
        assert_eq!(config.output_dir, PathBuf::from("facturas"));
        assert_eq!(config.currency_symbol, "Q");
    }

    #[test]
    fn test_precedence_flags_over_env_over_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{ "store_name": "From File", "tax_rate": "0.10", "output_dir": "file-dir" }"#,
        );
        let env = env_from(&[
            (ENV_STORE_NAME, "From Env"),
            (ENV_TAX_RATE, "0.12"),
            (ENV_OUTPUT_DIR, "env-dir"),
        ]);
        let cli = Cli {
            config: Some(path),
            tax_rate: Some(TaxRate::from_bps(700)),
            ..Cli::default()
        };

        let config = ConfigState::load_with(&cli, env).unwrap();
        assert_eq!(config.store_name, "From Env");
        assert_eq!(config.tax_rate, TaxRate::from_bps(700));
        assert_eq!(config.output_dir, PathBuf::from("env-dir"));
    }

    #[test]
    fn test_invalid_env_tax_rate() {
        let err = ConfigState::load_with(&Cli::default(), env_from(&[(ENV_TAX_RATE, "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_TAX_RATE));
    }

    #[test]
    fn test_missing_and_malformed_file() {
        let dir = TempDir::new().unwrap();

        let cli = Cli {
            config: Some(dir.path().join("absent.json")),
            ..Cli::default()
        };
        assert!(matches!(
            ConfigState::load_with(&cli, no_env),
            Err(ConfigError::ReadFile { .. })
        ));

        let cli = Cli {
            config: Some(write_config(&dir, r#"{ "tax": "0.13" }"#)),
            ..Cli::default()
        };
        assert!(matches!(
            ConfigState::load_with(&cli, no_env),
            Err(ConfigError::ParseFile { .. })
        ));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(350)), "$3.50");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }
}
