//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices, subtotals and totals are i64 cents.                         │
//! │    Only the display layer turns them into "28000.00".                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bono_core::money::Money;
//!
//! let price = Money::from_major(14_000); // $14000.00
//! let subtotal = price.multiply_quantity(2);
//! assert_eq!(subtotal.to_fixed(), "28000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.unit_price ──► QuantityLine.subtotal ──► Cart.total
///                                                          │
///                                                          ▼
///                                     Receipt.total, ReceiptLine.subtotal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Catalog prices are whole amounts, so this is what the catalog uses.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::money::Money;
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::money::Money;
    ///
    /// let unit_price = Money::from_major(21_000);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(63_000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Two-decimal fixed formatting without a currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use bono_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2_800_000).to_fixed(), "28000.00");
    /// assert_eq!(Money::from_cents(5).to_fixed(), "0.05");
    /// assert_eq!(Money::from_cents(-150).to_fixed(), "-1.50");
    /// ```
    pub fn to_fixed(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the order form prints it: `$28000.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

/// Summing an iterator of Money values (cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(14_000).to_string(), "$14000.00");
        assert_eq!(Money::from_cents(1).to_string(), "$0.01");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_multiply_quantity() {
        let price = Money::from_major(12_000);
        assert_eq!(price.multiply_quantity(0), Money::zero());
        assert_eq!(price.multiply_quantity(100).cents(), 120_000_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_cents(50), Money::zero()]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 150);
    }

    #[test]
    fn test_predicates() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(1).is_positive());
    }
}
