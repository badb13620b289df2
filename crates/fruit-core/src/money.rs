//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    5 × 13.0 × 0.8 = 52.00000000000001  ❌ WRONG!                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + basis-point rates                  │
//! │    6500 × 8000 / 10000 = 5200  → 52.00 exactly                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fruit_core::money::Money;
//!
//! let price = Money::from_major(13);     // 13.00 per unit
//! let line = price.multiply_quantity(5); // 65.00
//! assert_eq!(line.cents(), 6500);
//! assert_eq!(line.to_string(), "65.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (hundredths).
///
/// ## Design Decisions
/// - **i64 (signed)**: a threshold deduction larger than the subtotal
///   produces a negative total, which must be representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Item.unit_price ──► LineItem.amount ──► × DiscountRate ──► LineItem.subtotal
///                                                                │
///                        PriceBreakdown.subtotal ◄───────────────┘
///                                │
///                                ▼  − ThresholdDeduction.amount (if reached)
///                        PriceBreakdown.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use fruit_core::money::Money;
    ///
    /// let price = Money::from_cents(1350);
    /// assert_eq!(price.to_string(), "13.50");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    ///
    /// Catalog prices and plan thresholds are whole numbers, so this is the
    /// constructor most call sites use.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use fruit_core::money::Money;
    ///
    /// let apple = Money::from_major(8);
    /// assert_eq!(apple.multiply_quantity(2), Money::from_major(16));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Scales the amount by a discount multiplier.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, i.e. round half up to
    /// the nearest minor unit. A full rate (10000 bps) returns the amount
    /// unchanged.
    ///
    /// ```rust
    /// use fruit_core::money::Money;
    /// use fruit_core::types::DiscountRate;
    ///
    /// let strawberries = Money::from_major(65);
    /// let rate = DiscountRate::from_bps(8000).unwrap(); // 0.8
    /// assert_eq!(strawberries.apply_rate(rate), Money::from_major(52));
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        // i128 so large quantities times 10000 cannot overflow
        let scaled = (self.0 as i128 * rate.bps() as i128 + 5000).div_euclid(10000);
        Money(scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as `major.minor` without a currency symbol.
///
/// The symbol is a presentation concern; see `receipt::ReceiptOptions`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
