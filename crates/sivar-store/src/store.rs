//! # Invoice Store
//!
//! Saves rendered invoices as `<output_dir>/<file_name>`.
//!
//! ```text
//! save("FACT-20261016-093000.txt", text)
//!      │
//!      ├── create_dir_all(output_dir)   ──✗──► StoreError::CreateDir
//!      │
//!      ├── File::create (truncates)     ──✗──► StoreError::Write
//!      ├── write_all + flush            ──✗──► StoreError::Write
//!      │
//!      └── Ok(output_dir/FACT-20261016-093000.txt)   (file closed on return)
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sivar_core::Invoice;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "facturas";

/// Flat-file invoice sink.
#[derive(Debug, Clone)]
pub struct InvoiceStore {
    output_dir: PathBuf,
}

impl InvoiceStore {
    /// Creates a store rooted at `output_dir`. Nothing is touched on disk
    /// until the first save.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        InvoiceStore {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `text` to `file_name` inside the output directory.
    ///
    /// Creates the directory if missing and overwrites an existing file of
    /// the same name. Returns the full path written.
    pub fn save(&self, file_name: &str, text: &str) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| {
            warn!(
                dir = %self.output_dir.display(),
                error = %source,
                "Cannot create output directory"
            );
            StoreError::CreateDir {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let path = self.output_dir.join(file_name);
        write_file(&path, text).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Invoice write failed");
            StoreError::Write {
                path: path.clone(),
                source,
            }
        })?;

        info!(path = %path.display(), bytes = text.len(), "Invoice saved");
        Ok(path)
    }

    /// Saves `text` under the invoice's own file name.
    pub fn save_invoice(&self, invoice: &Invoice, text: &str) -> StoreResult<PathBuf> {
        self.save(&invoice.file_name(), text)
    }
}

impl Default for InvoiceStore {
    fn default() -> Self {
        InvoiceStore::new(DEFAULT_OUTPUT_DIR)
    }
}

fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sivar_core::{render_plain_text, Cart, Catalog, Customer, TaxRate};
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = InvoiceStore::new(temp_dir.path().join("facturas").join("2026"));

        let path = store.save("FACT-1.txt", "hello").unwrap();

        assert_eq!(path, store.output_dir().join("FACT-1.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = InvoiceStore::new(temp_dir.path());

        store.save("FACT-1.txt", "a much longer first version").unwrap();
        let path = store.save("FACT-1.txt", "short").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "short");
    }

    #[test]
    fn test_save_keeps_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let store = InvoiceStore::new(temp_dir.path());

        let path = store.save("FACT-1.txt", "Café 250g  Jabón de baño").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Café 250g  Jabón de baño");
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("facturas");
        fs::write(&blocker, "not a directory").unwrap();

        let store = InvoiceStore::new(&blocker);
        let err = store.save("FACT-1.txt", "text").unwrap_err();

        assert!(matches!(err, StoreError::CreateDir { .. }));
        assert_eq!(err.path(), blocker.as_path());
        assert!(err.to_string().starts_with("cannot create directory"));
    }

    #[test]
    fn test_target_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("FACT-1.txt")).unwrap();

        let store = InvoiceStore::new(temp_dir.path());
        let err = store.save("FACT-1.txt", "text").unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(err.path(), temp_dir.path().join("FACT-1.txt").as_path());
    }

    #[test]
    fn test_save_invoice_uses_invoice_file_name() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add_item(catalog.get("P001").unwrap(), 2).unwrap();
        let customer =
            Customer::new("Ana", "ana@example.com", "01234567-8", "Calle 1", at).unwrap();
        let invoice = Invoice::from_cart_at(customer, &cart, TaxRate::from_bps(1300), at);
        let text = render_plain_text(&invoice, "TIENDA SIVAR MARKET");

        let temp_dir = TempDir::new().unwrap();
        let path = InvoiceStore::new(temp_dir.path())
            .save_invoice(&invoice, &text)
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "FACT-20261016-093000.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), text);
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(InvoiceStore::default().output_dir(), Path::new("facturas"));
    }
}
