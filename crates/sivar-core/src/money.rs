//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Tax is computed on the exact cart total, which may carry more than    │
//! │  two fractional digits (12.345 × 0.13 = 1.60485). Integer cents would   │
//! │  already have rounded it away.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Arithmetic is exact. Rounding happens ONLY in round_half_up(),       │
//! │    and only when an invoice is built.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sivar_core::money::Money;
//!
//! let price = Money::from_cents(350); // 3.50
//! let line = price * 2;               // 7.00
//! assert_eq!(line.to_string(), "7.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

/// Number of fractional digits kept on invoice figures.
pub const CURRENCY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.unit_price ──► CartItem.line_total ──► Cart.total (unrounded)  │
/// │                                                     │                   │
/// │                                                     ▼                   │
/// │                              Invoice: subtotal / tax / total (2 dp)     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use sivar_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CURRENCY_DECIMALS))
    }

    /// Returns the underlying decimal.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use sivar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a tax rate and returns the UNROUNDED tax amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use sivar_core::money::Money;
    /// use sivar_core::types::TaxRate;
    ///
    /// let raw = Money::new(Decimal::new(12345, 3)); // 12.345
    /// let tax = raw.calculate_tax(TaxRate::from_bps(1300));
    /// assert_eq!(tax.amount(), Decimal::new(160485, 5)); // 1.60485
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.fraction())
    }

    /// Rounds to two fractional digits, ties away from zero (half-up).
    ///
    /// ## Half-Up vs Bankers Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  value      half-up (this)    half-even (bankers)                   │
    /// │  12.345  →  12.35             12.34                                 │
    /// │   0.005  →   0.01              0.00                                 │
    /// │  -0.005  →  -0.01             -0.00                                 │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn round_half_up(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the exact amount, padded to at least two fractional digits.
///
/// Never rounds: an unrounded 12.345 prints as `12.345`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        if value.scale() < CURRENCY_DECIMALS {
            value.rescale(CURRENCY_DECIMALS);
        }
        // Route through pad() so callers can use width/alignment specifiers.
        f.pad(&value.to_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(num: i64, scale: u32) -> Money {
        Money::new(Decimal::new(num, scale))
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
    }

    #[test]
    fn test_display_pads_but_never_rounds() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(dec(35, 1).to_string(), "3.50");
        assert_eq!(dec(7, 0).to_string(), "7.00");
        assert_eq!(dec(12345, 3).to_string(), "12.345");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(791)), "    7.91");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(350), Money::from_cents(125), dec(5, 3)]
            .into_iter()
            .sum();
        assert_eq!(total, dec(4755, 3));
    }

    #[test]
    fn test_round_half_up_ties_away_from_zero() {
        assert_eq!(dec(12345, 3).round_half_up(), Money::from_cents(1235));
        assert_eq!(dec(5, 3).round_half_up(), Money::from_cents(1));
        assert_eq!(dec(4, 3).round_half_up(), Money::zero());
        assert_eq!(dec(-5, 3).round_half_up(), Money::from_cents(-1));
        assert_eq!(dec(160485, 5).round_half_up(), Money::from_cents(160));
    }

    #[test]
    fn test_tax_is_unrounded() {
        let tax = Money::from_cents(700).calculate_tax(TaxRate::from_bps(1300));
        assert_eq!(tax.amount(), Decimal::new(9100, 4));
        assert_eq!(tax.round_half_up(), Money::from_cents(91));
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_cents(100).is_negative());
        assert!(Money::from_cents(-100).is_negative());
    }

    /// Repeatedly adding and subtracting a sub-cent amount never drifts.
    #[test]
    fn test_no_drift_under_repeated_arithmetic() {
        let tenth = dec(1, 1);
        let mut acc = Money::zero();
        for _ in 0..1000 {
            acc += tenth;
        }
        assert_eq!(acc, dec(100, 0));
        for _ in 0..1000 {
            acc = acc - tenth;
        }
        assert_eq!(acc, Money::zero());
    }
}
