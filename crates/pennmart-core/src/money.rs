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
//! │  The marketplace screens this crate replaces computed totals with       │
//! │  floats and rounded in two different places with two different rules.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, fee, tax, and total is an i64 count of cents.           │
//! │    Rounding happens exactly once, in `calculate_tax`, with one rule.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pennmart_core::money::Money;
//!
//! // Create from cents (the only way in)
//! let price = Money::from_cents(2499); // $24.99
//!
//! // Arithmetic operations
//! let pair = price * 2;                       // $49.98
//! let with_fee = price + Money::from_cents(400); // $28.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative intermediates (refund math in the
///   app shell), even though the core rejects negative subtotals at
///   checkout
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, TS export for the frontend
///
/// ## Where Money Flows
/// ```text
/// Listing.price_cents ──► CartLine.unit_price_cents ──► line total
///                                                          │
///                              subtotal ◄─────────────────┘
///                                 │
///                                 ▼
///            calculate_tax ──► OrderTotals ──► payment amount (gateway)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// There is deliberately no `from_float` constructor; dollars never
    /// enter the core as floating point.
    ///
    /// ```rust
    /// use pennmart_core::money::Money;
    ///
    /// let price = Money::from_cents(2499); // $24.99
    /// assert_eq!(price.cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates sales tax, rounding half up to the nearest cent.
    ///
    /// ## The One Canonical Rounding Rule
    /// The app screens this crate consolidates had drifted into two
    /// different tax expressions that disagree at some inputs. This
    /// function is now the only place tax rounding happens:
    ///
    /// Integer math throughout: `(cents × bps + 5000) / 10000`, where the
    /// `+5000` rounds the half-cent boundary up. `i128` intermediates make
    /// overflow unreachable for any realistic amount.
    ///
    /// ```rust
    /// use pennmart_core::money::Money;
    /// use pennmart_core::types::TaxRate;
    ///
    /// // $12.34 at 8% = $0.9872 → rounds up to $0.99
    /// let subtotal = Money::from_cents(1234);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    /// assert_eq!(tax.cents(), 99);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use pennmart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000); // $10.00 textbook
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 2000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Localized currency formatting is the
/// frontend's responsibility; the core only ever hands out integer cents.
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

/// Default money is zero.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
