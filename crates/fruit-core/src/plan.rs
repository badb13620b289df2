//! # Customer Plans
//!
//! The four named pricing plans the stand offers.
//!
//! ```text
//! ┌──────┬──────────────────────────┬──────────────┬──────────────────────┐
//! │ Plan │ Purchasable              │ Strawberry   │ Threshold deduction  │
//! ├──────┼──────────────────────────┼──────────────┼──────────────────────┤
//! │  A   │ apple, strawberry        │ ×1.0         │ -                    │
//! │  B   │ apple, strawberry, mango │ ×1.0         │ -                    │
//! │  C   │ apple, strawberry, mango │ ×0.8         │ -                    │
//! │  D   │ apple, strawberry, mango │ ×0.8         │ spend 100, save 10   │
//! └──────┴──────────────────────────┴──────────────┴──────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{APPLE, MANGO, STRAWBERRY};
use crate::engine::PurchaseRequest;
use crate::error::CoreError;
use crate::money::Money;
use crate::types::{DiscountRate, ItemDiscount, ThresholdDeduction};

/// Strawberries at 80% of list price.
const STRAWBERRY_RATE_BPS: u32 = 8000;

const ALL_FRUIT: [&str; 3] = [APPLE, STRAWBERRY, MANGO];
const NO_MANGO: [&str; 2] = [APPLE, STRAWBERRY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerPlan {
    /// Apples and strawberries only, no promotion.
    A,
    /// All three fruits, no promotion.
    B,
    /// All three fruits, strawberries 20% off.
    C,
    /// All three fruits, strawberries 20% off, 10 off once spending reaches 100.
    D,
}

impl CustomerPlan {
    pub const fn all() -> [CustomerPlan; 4] {
        [CustomerPlan::A, CustomerPlan::B, CustomerPlan::C, CustomerPlan::D]
    }

    pub const fn code(&self) -> char {
        match self {
            CustomerPlan::A => 'A',
            CustomerPlan::B => 'B',
            CustomerPlan::C => 'C',
            CustomerPlan::D => 'D',
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            CustomerPlan::A => "Apples and strawberries only, no promotion",
            CustomerPlan::B => "All three fruits, no promotion",
            CustomerPlan::C => "All three fruits, strawberries 20% off",
            CustomerPlan::D => "All three fruits, strawberries 20% off, spend 100 save 10",
        }
    }

    /// Item ids this plan may buy, in prompt order.
    pub fn purchasable_items(&self) -> &'static [&'static str] {
        match self {
            CustomerPlan::A => &NO_MANGO,
            _ => &ALL_FRUIT,
        }
    }

    pub fn allows(&self, item: &str) -> bool {
        self.purchasable_items().contains(&item)
    }

    pub fn discount(&self) -> Option<ItemDiscount> {
        match self {
            CustomerPlan::A | CustomerPlan::B => None,
            CustomerPlan::C | CustomerPlan::D => {
                // 8000 is inside (0, 10000]
                DiscountRate::from_bps(STRAWBERRY_RATE_BPS)
                    .ok()
                    .map(|rate| ItemDiscount::new(STRAWBERRY, rate))
            }
        }
    }

    pub fn deduction(&self) -> Option<ThresholdDeduction> {
        match self {
            CustomerPlan::D => Some(ThresholdDeduction::new(
                Money::from_major(100),
                Money::from_major(10),
            )),
            _ => None,
        }
    }

    /// Builds the engine request for these quantities under this plan.
    ///
    /// Quantities are copied as given; run
    /// [`validate_order`](crate::validation::validate_order) first to
    /// enforce the plan's purchasable items.
    pub fn request<'a, I>(&self, quantities: I) -> PurchaseRequest
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut request = quantities
            .into_iter()
            .fold(PurchaseRequest::new(), |req, (item, qty)| req.with_quantity(item, qty));
        request.discount = self.discount();
        request.deduction = self.deduction();
        request
    }
}

impl fmt::Display for CustomerPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CustomerPlan {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(CustomerPlan::A),
            "B" => Ok(CustomerPlan::B),
            "C" => Ok(CustomerPlan::C),
            "D" => Ok(CustomerPlan::D),
            _ => Err(CoreError::UnknownPlan(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PriceEngine;

    #[test]
    fn test_parse() {
        assert_eq!("a".parse::<CustomerPlan>().unwrap(), CustomerPlan::A);
        assert_eq!(" D \n".parse::<CustomerPlan>().unwrap(), CustomerPlan::D);
        assert_eq!(
            "E".parse::<CustomerPlan>(),
            Err(CoreError::UnknownPlan("E".to_string()))
        );
        assert!("".parse::<CustomerPlan>().is_err());
    }

    #[test]
    fn test_plan_a_excludes_mango() {
        assert!(CustomerPlan::A.allows(APPLE));
        assert!(!CustomerPlan::A.allows(MANGO));
        assert!(CustomerPlan::B.allows(MANGO));
    }

    #[test]
    fn test_modifiers() {
        assert!(CustomerPlan::A.discount().is_none());
        assert!(CustomerPlan::B.deduction().is_none());

        let discount = CustomerPlan::C.discount().unwrap();
        assert_eq!(discount.item.as_str(), STRAWBERRY);
        assert_eq!(discount.rate.bps(), 8000);
        assert!(CustomerPlan::C.deduction().is_none());

        let rule = CustomerPlan::D.deduction().unwrap();
        assert_eq!(rule.threshold, Money::from_major(100));
        assert_eq!(rule.amount, Money::from_major(10));
    }

    #[test]
    fn test_plan_totals() {
        let engine = PriceEngine::default();
        let quantities = [(APPLE, 5), (STRAWBERRY, 5), (MANGO, 3)];

        let totals: Vec<Money> = [CustomerPlan::B, CustomerPlan::C, CustomerPlan::D]
            .iter()
            .map(|plan| engine.compute_total(&plan.request(quantities)).unwrap())
            .collect();

        // 40 + 65 + 60, then strawberries at 52, then 10 off
        assert_eq!(
            totals,
            vec![Money::from_major(165), Money::from_major(152), Money::from_major(142)]
        );
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(CustomerPlan::C.to_string(), "C");
    }
}
