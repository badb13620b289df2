//! # Price Engine
//!
//! Turns a [`PurchaseRequest`] into a total or a full [`PriceBreakdown`].
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          compute_breakdown                              │
//! │                                                                         │
//! │  for each catalog item:                                                 │
//! │      amount   = unit_price × quantity                                   │
//! │      subtotal = amount × rate   (only the discounted item, rate ≤ 1)    │
//! │                                                                         │
//! │  subtotal = Σ line subtotals                                            │
//! │                                                                         │
//! │  threshold > 0 && subtotal ≥ threshold ?                                │
//! │      yes → total = subtotal − deduction                                 │
//! │      no  → total = subtotal                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never checks quantities against plan policy and never clamps
//! the total at zero: a deduction larger than the subtotal yields a negative
//! total. Callers validate input first (see [`crate::validation`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{DiscountRate, ItemDiscount, ItemId, ThresholdDeduction};

// =============================================================================
// Request
// =============================================================================

/// What the customer buys and which modifiers apply.
///
/// Items absent from `quantities` count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub quantities: BTreeMap<ItemId, u32>,
    pub discount: Option<ItemDiscount>,
    pub deduction: Option<ThresholdDeduction>,
}

impl PurchaseRequest {
    pub fn new() -> Self {
        PurchaseRequest::default()
    }

    pub fn with_quantity(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.quantities.insert(ItemId::new(item), quantity);
        self
    }

    pub fn with_discount(mut self, discount: ItemDiscount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_deduction(mut self, deduction: ThresholdDeduction) -> Self {
        self.deduction = Some(deduction);
        self
    }

    /// Quantity requested for `item` (zero when absent).
    pub fn quantity(&self, item: &str) -> u32 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    /// True when every quantity is zero.
    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0)
    }

    fn rate_for(&self, item: &ItemId) -> Option<DiscountRate> {
        self.discount
            .as_ref()
            .filter(|d| &d.item == item)
            .map(|d| d.rate)
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// One priced catalog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Rate applied to this line, if it is the discounted item.
    pub discount: Option<DiscountRate>,
    /// `unit_price × quantity`, before the discount.
    pub amount: Money,
    /// Amount after the discount.
    pub subtotal: Money,
}

/// The full result of pricing a request, for receipts and JSON output.
///
/// Derived on every call; nothing here is stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// One line per catalog item, in catalog order (zero quantities included).
    pub lines: Vec<LineItem>,
    pub subtotal: Money,
    /// The threshold rule that was in effect, applied or not.
    pub deduction_rule: Option<ThresholdDeduction>,
    pub deduction_applied: bool,
    /// Amount taken off (zero when not applied).
    pub deduction: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// Lines with a non-zero quantity.
    pub fn purchased(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter().filter(|line| line.quantity > 0)
    }

    pub fn line(&self, item: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.item_id.as_str() == item)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Stateless pricing over an owned, immutable catalog.
#[derive(Debug, Clone, Default)]
pub struct PriceEngine {
    catalog: Catalog,
}

impl PriceEngine {
    pub fn new(catalog: Catalog) -> Self {
        PriceEngine { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the payable amount for a request.
    ///
    /// ```rust
    /// use fruit_core::{Money, PriceEngine, PurchaseRequest};
    ///
    /// let engine = PriceEngine::default();
    /// let request = PurchaseRequest::new().with_quantity("apple", 2);
    /// assert_eq!(engine.compute_total(&request).unwrap(), Money::from_major(16));
    /// ```
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`](crate::CoreError::ItemNotFound) if the
    /// request or its discount names an item the catalog does not carry.
    pub fn compute_total(&self, request: &PurchaseRequest) -> CoreResult<Money> {
        Ok(self.compute_breakdown(request)?.total)
    }

    /// Prices a request line by line.
    pub fn compute_breakdown(&self, request: &PurchaseRequest) -> CoreResult<PriceBreakdown> {
        for id in request.quantities.keys() {
            self.catalog.require(id.as_str())?;
        }
        if let Some(discount) = &request.discount {
            self.catalog.require(discount.item.as_str())?;
        }

        let lines: Vec<LineItem> = self
            .catalog
            .iter()
            .map(|item| {
                let quantity = request.quantity(item.id.as_str());
                let discount = request.rate_for(&item.id);
                let amount = item.price_for(quantity);
                let subtotal = discount.map_or(amount, |rate| amount.apply_rate(rate));

                LineItem {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    quantity,
                    unit_price: item.unit_price,
                    discount,
                    amount,
                    subtotal,
                }
            })
            .collect();

        let subtotal: Money = lines.iter().map(|line| line.subtotal).sum();

        let deduction_applied = request
            .deduction
            .is_some_and(|rule| rule.applies_to(subtotal));
        let deduction = match request.deduction {
            Some(rule) if deduction_applied => rule.amount,
            _ => Money::zero(),
        };

        Ok(PriceBreakdown {
            lines,
            subtotal,
            deduction_rule: request.deduction,
            deduction_applied,
            deduction,
            total: subtotal - deduction,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
