//! # Interactive Shell
//!
//! Menu loop over any `BufRead` / `Write` pair: stdin/stdout in the binary,
//! byte buffers in tests.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ===== TIENDA SIVAR MARKET =====                                        │
//! │  1) List products                                                       │
//! │  2) Add to cart                                                         │
//! │  3) View cart                                                           │
//! │  4) Remove from cart                                                    │
//! │  5) Checkout                                                            │
//! │  6) Clear cart                                                          │
//! │  0) Exit                                                                │
//! │  Choose an option:                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors are printed and the menu comes back. End of input at any
//! prompt ends the session like `0`.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};
use sivar_core::validation::{
    parse_quantity, validate_address, validate_customer_name, validate_email,
    validate_national_id, ValidationResult,
};
use sivar_core::Customer;
use tracing::{debug, info};

use crate::commands::{cart, checkout, product};
use crate::error::ConsoleError;
use crate::state::AppState;

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListProducts,
    AddToCart,
    ViewCart,
    RemoveFromCart,
    Checkout,
    ClearCart,
    Exit,
}

impl MenuOption {
    /// Parses the cashier's menu choice. `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuOption::ListProducts),
            "2" => Some(MenuOption::AddToCart),
            "3" => Some(MenuOption::ViewCart),
            "4" => Some(MenuOption::RemoveFromCart),
            "5" => Some(MenuOption::Checkout),
            "6" => Some(MenuOption::ClearCart),
            "0" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Source of checkout timestamps.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    state: AppState,
    clock: Clock,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, state: AppState) -> Self {
        Shell {
            input,
            output,
            state,
            clock: local_now,
        }
    }

    /// Replaces the wall clock used for customer ids and invoice numbers.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Gives back the output sink, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until `0` or end of input.
    ///
    /// Only terminal I/O failures are returned; command errors are printed.
    pub fn run(&mut self) -> io::Result<()> {
        info!(store = %self.state.config.store_name, "Shell started");

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            match MenuOption::parse(&choice) {
                Some(MenuOption::Exit) => break,
                Some(option) => {
                    debug!(?option, "Menu option selected");
                    self.dispatch(option)?;
                }
                None => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        info!("Shell finished");
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> io::Result<()> {
        match option {
            MenuOption::ListProducts => self.list_products(),
            MenuOption::AddToCart => self.add_to_cart(),
            MenuOption::ViewCart => self.view_cart(),
            MenuOption::RemoveFromCart => self.remove_from_cart(),
            MenuOption::Checkout => self.checkout(),
            MenuOption::ClearCart => self.clear_cart(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== {} =====", self.state.config.store_name)?;
        writeln!(self.output, "1) List products")?;
        writeln!(self.output, "2) Add to cart")?;
        writeln!(self.output, "3) View cart")?;
        writeln!(self.output, "4) Remove from cart")?;
        writeln!(self.output, "5) Checkout")?;
        writeln!(self.output, "6) Clear cart")?;
        writeln!(self.output, "0) Exit")
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    fn list_products(&mut self) -> io::Result<()> {
        let products = product::list_products(&self.state);
        let text = product::format_product_list(&products, &self.state.config);
        write!(self.output, "{text}")
    }

    fn add_to_cart(&mut self) -> io::Result<()> {
        let Some(product_id) = self.prompt("Product id: ")? else {
            return Ok(());
        };
        if self.state.catalog.get(&product_id).is_none() {
            return self.report(&ConsoleError::not_found("Product", &product_id));
        }

        let Some(quantity) = self.prompt_valid("Quantity: ", parse_quantity)? else {
            return Ok(());
        };

        match cart::add_to_cart(&mut self.state, &product_id, quantity) {
            Ok(response) => writeln!(
                self.output,
                "Added. Cart total: {}",
                self.state.config.format_currency(response.total)
            ),
            Err(e) => self.report(&e),
        }
    }

    fn view_cart(&mut self) -> io::Result<()> {
        let response = cart::get_cart(&self.state);
        let text = cart::format_cart(&response, &self.state.config);
        write!(self.output, "{text}")
    }

    fn remove_from_cart(&mut self) -> io::Result<()> {
        let Some(product_id) = self.prompt("Product id to remove: ")? else {
            return Ok(());
        };

        let quantity = loop {
            let Some(raw) = self.prompt("Quantity to remove (blank for all): ")? else {
                return Ok(());
            };
            if raw.is_empty() {
                break None;
            }
            match parse_quantity(&raw) {
                Ok(qty) => break Some(qty),
                Err(e) => self.report(&ConsoleError::from(e))?,
            }
        };

        match cart::remove_from_cart(&mut self.state, &product_id, quantity) {
            Ok(cart::RemoveOutcome::Removed) => writeln!(self.output, "Product removed."),
            Ok(cart::RemoveOutcome::Reduced { remaining }) => {
                writeln!(self.output, "Quantity updated, {remaining} left.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn checkout(&mut self) -> io::Result<()> {
        if let Err(e) = checkout::ensure_cart_not_empty(&self.state) {
            return self.report(&e);
        }

        let Some(customer) = self.prompt_customer()? else {
            return Ok(());
        };

        let issued_at = (self.clock)();
        let outcome = match checkout::checkout(&mut self.state, customer, issued_at) {
            Ok(outcome) => outcome,
            Err(e) => return self.report(&e),
        };

        writeln!(self.output)?;
        write!(self.output, "{}", outcome.text)?;
        writeln!(self.output)?;
        match &outcome.saved {
            Ok(path) => writeln!(self.output, "Invoice saved to {}", path.display()),
            Err(e) => self.report(e),
        }
    }

    fn clear_cart(&mut self) -> io::Result<()> {
        cart::clear_cart(&mut self.state);
        writeln!(self.output, "Cart cleared.")
    }

    // -------------------------------------------------------------------------
    // Prompts
    // -------------------------------------------------------------------------

    /// Captures every customer field, re-prompting each until it is valid.
    fn prompt_customer(&mut self) -> io::Result<Option<Customer>> {
        let Some(name) = self.prompt_field("Customer name: ", validate_customer_name)? else {
            return Ok(None);
        };
        let Some(national_id) =
            self.prompt_field("National ID (########-#): ", validate_national_id)?
        else {
            return Ok(None);
        };
        let Some(email) = self.prompt_field("Email: ", validate_email)? else {
            return Ok(None);
        };
        let Some(address) = self.prompt_field("Billing address: ", validate_address)? else {
            return Ok(None);
        };

        let captured_at = (self.clock)();
        match Customer::new(&name, &email, &national_id, &address, captured_at) {
            Ok(customer) => Ok(Some(customer)),
            Err(e) => {
                self.report(&ConsoleError::from(e))?;
                Ok(None)
            }
        }
    }

    fn prompt_field(
        &mut self,
        label: &str,
        validate: fn(&str) -> ValidationResult<()>,
    ) -> io::Result<Option<String>> {
        self.prompt_valid(label, |raw| validate(raw).map(|()| raw.to_string()))
    }

    /// Prompts until `parse` accepts the line. `None` on end of input.
    fn prompt_valid<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.report(&ConsoleError::from(e))?,
            }
        }
    }

    /// Prints `label`, reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &ConsoleError) -> io::Result<()> {
        debug!(code = %err.code, message = %err.message, "Command failed");
        writeln!(self.output, "Error: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn run_script(script: &str, dir: &TempDir) -> (String, AppState) {
        let state = AppState::new(ConfigState {
            output_dir: dir.path().to_path_buf(),
            ..ConfigState::default()
        });
        let mut shell =
            Shell::new(Cursor::new(script.to_string()), Vec::new(), state).with_clock(fixed_clock);
        shell.run().unwrap();

        let Shell { output, state, .. } = shell;
        (String::from_utf8(output).unwrap(), state)
    }

    #[test]
    fn test_menu_option_parse() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::ListProducts));
        assert_eq!(MenuOption::parse(" 5 "), Some(MenuOption::Checkout));
        assert_eq!(MenuOption::parse("0"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::parse("7"), None);
        assert_eq!(MenuOption::parse(""), None);
    }

    #[test]
    fn test_invalid_option_and_eof() {
        let dir = TempDir::new().unwrap();
        let (out, _) = run_script("9\n", &dir);

        assert!(out.contains("Invalid option."));
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_list_products() {
        let dir = TempDir::new().unwrap();
        let (out, _) = run_script("1\n0\n", &dir);

        assert!(out.contains("P001"));
        assert!(out.contains("Desodorante 150ml"));
    }

    #[test]
    fn test_add_reprompts_on_bad_quantity() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP001\nabc\n0\n-1\n3\n0\n", &dir);

        assert_eq!(out.matches("Quantity: ").count(), 4);
        assert!(out.contains("Error: quantity has invalid format"));
        assert!(out.contains("Error: quantity must be positive"));
        assert_eq!(state.cart.items()[0].quantity(), 3);
    }

    #[test]
    fn test_add_reprompts_on_oversized_quantity() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP001\n9223372036854775807\n2\n0\n", &dir);

        assert!(out.contains("Error: quantity must be between 1 and 999"));
        assert_eq!(state.cart.items()[0].quantity(), 2);
    }

    #[test]
    fn test_add_unknown_product_skips_quantity_prompt() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP999\n0\n", &dir);

        assert!(out.contains("Error: Product not found: P999"));
        assert!(!out.contains("Quantity: "));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_remove_partial_and_all() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP001\n5\n4\np001\n2\n4\nP001\n\n0\n", &dir);

        assert!(out.contains("Quantity updated, 3 left."));
        assert!(out.contains("Product removed."));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_checkout_on_empty_cart_does_not_prompt() {
        let dir = TempDir::new().unwrap();
        let (out, _) = run_script("5\n0\n", &dir);

        assert!(out.contains("Error: The cart is empty."));
        assert!(!out.contains("Customer name: "));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_checkout_reprompts_each_field() {
        let dir = TempDir::new().unwrap();
        let script = "2\nP001\n2\n5\n\nAna Pérez\n123\n01234567-8\nana@example\nana@example.com\n\nCalle 1\n0\n";
        let (out, state) = run_script(script, &dir);

        assert_eq!(out.matches("Customer name: ").count(), 2);
        assert_eq!(out.matches("National ID (########-#): ").count(), 2);
        assert_eq!(out.matches("Email: ").count(), 2);
        assert_eq!(out.matches("Billing address: ").count(), 2);
        assert!(out.contains("Invoice No: FACT-20261016-093000"));
        assert!(out.contains("Invoice saved to"));
        assert!(dir.path().join("FACT-20261016-093000.txt").exists());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_eof_during_checkout_keeps_cart() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP001\n1\n5\nAna\n", &dir);

        assert!(out.trim_end().ends_with("Goodbye."));
        assert_eq!(state.cart.len(), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_cart() {
        let dir = TempDir::new().unwrap();
        let (out, state) = run_script("2\nP001\n1\n6\n3\n0\n", &dir);

        assert!(out.contains("Cart cleared."));
        assert!(out.contains("The cart is empty."));
        assert!(state.cart.is_empty());
    }
}
