//! # Domain Types
//!
//! Core domain types used throughout Sivar Market.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id  ("P001")   │   │  id (C-<time>)  │   │  fraction       │       │
//! │  │  name           │   │  name, email    │   │  0.13 = 13%     │       │
//! │  │  unit_price     │   │  national_id    │   │                 │       │
//! │  │                 │   │  address        │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │   owned by Catalog       built per checkout    from configuration      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_address, validate_customer_name, validate_email, validate_national_id,
    validate_price, validate_product_id, validate_product_name,
};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a decimal fraction of the taxable amount.
///
/// ## Representations
/// - fraction: `0.13`
/// - basis points: `1300` (1 bps = 0.01%)
/// - percentage text: `"13%"`
///
/// A tax rate is never negative; every constructor enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a tax rate from a decimal fraction (0.13 = 13%).
    pub fn new(fraction: Decimal) -> CoreResult<Self> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(CoreError::InvalidTaxRate {
                value: fraction.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        Ok(TaxRate(fraction))
    }

    /// Creates a tax rate from basis points.
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 4))
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (13 for 0.13).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

/// Parses `"0.13"` as a fraction or `"13%"` as a percentage.
impl FromStr for TaxRate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let malformed = |reason: &str| CoreError::InvalidTaxRate {
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(malformed("is empty"));
        }

        let fraction = match raw.strip_suffix('%') {
            Some(pct) => {
                let pct = Decimal::from_str(pct.trim())
                    .map_err(|_| malformed("not a decimal percentage"))?;
                pct / Decimal::ONE_HUNDRED
            }
            None => Decimal::from_str(raw).map_err(|_| malformed("not a decimal number"))?,
        };

        TaxRate::new(fraction).map_err(|_| malformed("must not be negative"))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    unit_price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - id: non-empty, letters/digits/`-`/`_`, at most 50 characters
    /// - name: non-empty, at most 200 characters
    /// - unit_price: zero or more
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_string();

        validate_product_id(&id)?;
        validate_product_name(&name)?;
        validate_price(unit_price)?;

        Ok(Product {
            id,
            name,
            unit_price,
        })
    }

    /// Catalog key.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name shown in listings and on the invoice.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Billing details captured at checkout.
///
/// Transient: built fresh for one invoice and never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: String,
    name: String,
    email: String,
    national_id: String,
    address: String,
}

impl Customer {
    /// Validates every field and generates the customer id from `captured_at`.
    ///
    /// The first invalid field is reported; values are stored trimmed.
    pub fn new(
        name: &str,
        email: &str,
        national_id: &str,
        address: &str,
        captured_at: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        let national_id = national_id.trim();
        let address = address.trim();

        validate_customer_name(name)?;
        validate_national_id(national_id)?;
        validate_email(email)?;
        validate_address(address)?;

        Ok(Customer {
            id: format!("C-{}", captured_at.format("%Y%m%d%H%M%S")),
            name: name.to_string(),
            email: email.to_string(),
            national_id: national_id.to_string(),
            address: address.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1300);
        assert_eq!(rate.fraction(), Decimal::new(13, 2));
        assert_eq!(rate.to_string(), "13%");
    }

    #[test]
    fn test_tax_rate_parse() {
        assert_eq!("0.13".parse::<TaxRate>().unwrap(), TaxRate::from_bps(1300));
        assert_eq!("13%".parse::<TaxRate>().unwrap(), TaxRate::from_bps(1300));
        assert_eq!(" 8.25 % ".parse::<TaxRate>().unwrap(), TaxRate::from_bps(825));
        assert_eq!("0".parse::<TaxRate>().unwrap(), TaxRate::from_bps(0));
    }

    #[test]
    fn test_tax_rate_rejects_negative_and_malformed() {
        assert!(matches!(
            "-0.13".parse::<TaxRate>(),
            Err(CoreError::InvalidTaxRate { .. })
        ));
        assert!(matches!(
            "thirteen".parse::<TaxRate>(),
            Err(CoreError::InvalidTaxRate { .. })
        ));
        assert!("".parse::<TaxRate>().is_err());
        assert!("%".parse::<TaxRate>().is_err());
        assert!(TaxRate::new(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_product_new() {
        let product = Product::new("P001", "Café 250g", Money::from_cents(350)).unwrap();
        assert_eq!(product.id(), "P001");
        assert_eq!(product.name(), "Café 250g");
        assert_eq!(product.unit_price(), Money::from_cents(350));
    }

    #[test]
    fn test_product_rejects_bad_input() {
        assert!(Product::new("", "Name", Money::zero()).is_err());
        assert!(Product::new("P 1", "Name", Money::zero()).is_err());
        assert!(Product::new("P001", "  ", Money::zero()).is_err());
        assert!(Product::new("P001", "Name", Money::from_cents(-1)).is_err());
        // Free items are allowed
        assert!(Product::new("P001", "Sample", Money::zero()).is_ok());
    }

    #[test]
    fn test_customer_id_from_capture_time() {
        let customer = Customer::new(
            " Ana Pérez ",
            "ana@example.com",
            "01234567-8",
            "Calle 1, San Salvador",
            at(9, 30, 5),
        )
        .unwrap();

        assert_eq!(customer.id(), "C-20261016093005");
        assert_eq!(customer.name(), "Ana Pérez");
        assert_eq!(customer.national_id(), "01234567-8");
    }

    #[test]
    fn test_customer_reports_first_invalid_field() {
        let err = Customer::new("Ana", "ana@example", "01234567-8", "Calle 1", at(9, 0, 0))
            .unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "email")
        );

        let err = Customer::new("", "bad", "bad", "", at(9, 0, 0)).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "name"));
    }
}
