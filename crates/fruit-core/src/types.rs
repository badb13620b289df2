//! # Domain Types
//!
//! Core domain types used throughout the fruit stand.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      Item       │   │  ItemDiscount   │   │ ThresholdDeduction  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (ItemId)    │   │  item (ItemId)  │   │  threshold (Money)  │   │
//! │  │  name           │   │  rate           │   │  amount (Money)     │   │
//! │  │  unit_price     │   └────────┬────────┘   └─────────────────────┘   │
//! │  └─────────────────┘            │                                       │
//! │                        ┌────────▼────────┐                              │
//! │                        │  DiscountRate   │                              │
//! │                        │  ─────────────  │                              │
//! │                        │  bps (u32)      │                              │
//! │                        │  8000 = ×0.8    │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Item Identity
// =============================================================================

/// Identifier of a catalog item (`"apple"`, `"strawberry"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// An item the stand sells at a fixed unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Business identifier, unique within a catalog.
    pub id: ItemId,

    /// Display name shown on receipts.
    pub name: String,

    /// Price per unit (never negative).
    pub unit_price: Money,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Item {
            id: ItemId::new(id),
            name: name.into(),
            unit_price,
        }
    }

    /// Undiscounted price for `quantity` units.
    #[inline]
    pub fn price_for(&self, quantity: u32) -> Money {
        self.unit_price.multiply_quantity(quantity)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A price multiplier in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 1/10000. `8000` is a multiplier of 0.8 ("20% off"),
/// `10000` is 1.0 (no discount). Keeping the rate integral keeps every
/// line subtotal exact.
///
/// ## Invariant
/// `0 < bps <= 10000`, i.e. the multiplier is in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Multiplier of 1.0.
    pub const FULL: DiscountRate = DiscountRate(10_000);

    /// Creates a rate from basis points, rejecting values outside (0, 10000].
    pub fn from_bps(bps: u32) -> Result<Self, ValidationError> {
        if bps == 0 || bps > Self::FULL.0 {
            return Err(ValidationError::OutOfRange {
                field: "discount rate".to_string(),
                min: 1,
                max: Self::FULL.0 as i64,
            });
        }
        Ok(DiscountRate(bps))
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Basis points taken off the price (2000 for a 0.8 multiplier).
    #[inline]
    pub const fn off_bps(&self) -> u32 {
        Self::FULL.0 - self.0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.0 == Self::FULL.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::FULL
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        DiscountRate::from_bps(bps)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Pricing Modifiers
// =============================================================================

/// A discount multiplier applied to one designated item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDiscount {
    pub item: ItemId,
    pub rate: DiscountRate,
}

impl ItemDiscount {
    pub fn new(item: impl Into<String>, rate: DiscountRate) -> Self {
        ItemDiscount {
            item: ItemId::new(item),
            rate,
        }
    }
}

/// A flat amount taken off once the subtotal reaches a threshold.
///
/// ## Rule
/// Applies iff `threshold > 0` and `subtotal >= threshold` (inclusive).
/// The amount is never clamped against the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdDeduction {
    pub threshold: Money,
    pub amount: Money,
}

impl ThresholdDeduction {
    pub const fn new(threshold: Money, amount: Money) -> Self {
        ThresholdDeduction { threshold, amount }
    }

    /// Whether this deduction applies to the given subtotal.
    pub fn applies_to(&self, subtotal: Money) -> bool {
        self.threshold.is_positive() && subtotal >= self.threshold
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_bounds() {
        assert!(DiscountRate::from_bps(1).is_ok());
        assert!(DiscountRate::from_bps(8000).is_ok());
        assert!(DiscountRate::from_bps(10_000).is_ok());

        assert!(DiscountRate::from_bps(0).is_err());
        assert!(DiscountRate::from_bps(10_001).is_err());
    }

    #[test]
    fn test_discount_rate_accessors() {
        let rate = DiscountRate::from_bps(8000).unwrap();
        assert_eq!(rate.off_bps(), 2000);
        assert!(!rate.is_full());
        assert!(DiscountRate::default().is_full());
    }

    #[test]
    fn test_discount_rate_deserialize_validates() {
        let ok: DiscountRate = serde_json::from_str("8000").unwrap();
        assert_eq!(ok.bps(), 8000);
        assert!(serde_json::from_str::<DiscountRate>("0").is_err());
        assert!(serde_json::from_str::<DiscountRate>("12000").is_err());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rule = ThresholdDeduction::new(Money::from_major(100), Money::from_major(10));
        assert!(rule.applies_to(Money::from_major(100)));
        assert!(rule.applies_to(Money::from_major(152)));
        assert!(!rule.applies_to(Money::from_cents(9999)));
    }

    #[test]
    fn test_zero_threshold_never_applies() {
        let rule = ThresholdDeduction::new(Money::zero(), Money::from_major(10));
        assert!(!rule.applies_to(Money::zero()));
        assert!(!rule.applies_to(Money::from_major(500)));
    }

    #[test]
    fn test_item_price_for() {
        let mango = Item::new("mango", "Mango", Money::from_major(20));
        assert_eq!(mango.price_for(3), Money::from_major(60));
        assert_eq!(mango.price_for(0), Money::zero());
    }
}
