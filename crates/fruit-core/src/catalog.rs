//! # Catalog
//!
//! The immutable price list a [`PriceEngine`](crate::engine::PriceEngine)
//! is built from.
//!
//! ## Lifecycle
//! ```text
//! Catalog::fruit_stand()  ──┐
//!                           ├──► Catalog (validated, read-only) ──► PriceEngine::new
//! catalog file entries ─────┘
//!   Catalog::from_entries()
//! ```
//!
//! A catalog is validated once on construction. After that it is only read,
//! so an engine can be shared between threads without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::plan::CustomerPlan;
use crate::types::Item;
use crate::validation::{validate_item_id, validate_item_name, validate_price_cents};
use crate::MAX_CATALOG_ITEMS;

pub const APPLE: &str = "apple";
pub const STRAWBERRY: &str = "strawberry";
pub const MANGO: &str = "mango";

/// One row of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

/// An ordered, duplicate-free list of items.
///
/// ## Invariants
/// - Item ids are unique
/// - Unit prices are within `0..=MAX_PRICE_CENTS`
/// - At most `MAX_CATALOG_ITEMS` items
/// - Order is preserved and drives receipt line order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, validating every item.
    pub fn new(items: Vec<Item>) -> CoreResult<Self> {
        if items.len() > MAX_CATALOG_ITEMS {
            return Err(ValidationError::OutOfRange {
                field: "catalog items".to_string(),
                min: 0,
                max: MAX_CATALOG_ITEMS as i64,
            }
            .into());
        }

        let mut seen = HashSet::new();

        for item in &items {
            validate_item_id(item.id.as_str())?;
            validate_item_name(&item.name)?;
            validate_price_cents(item.unit_price.cents())?;

            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "item id".to_string(),
                    value: item.id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { items })
    }

    /// Builds a catalog from raw file entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        let items = entries
            .into_iter()
            .map(|e| Item::new(e.id.trim(), e.name.trim(), Money::from_cents(e.price_cents)))
            .collect();
        Catalog::new(items)
    }

    /// The stand's standard price list: apple 8, strawberry 13, mango 20.
    pub fn fruit_stand() -> Self {
        Catalog {
            items: vec![
                Item::new(APPLE, "Apple", Money::from_major(8)),
                Item::new(STRAWBERRY, "Strawberry", Money::from_major(13)),
                Item::new(MANGO, "Mango", Money::from_major(20)),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Looks up an item, failing with [`CoreError::ItemNotFound`].
    pub fn require(&self, id: &str) -> CoreResult<&Item> {
        self.get(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    /// Checks that every item any plan sells or discounts is present.
    ///
    /// A custom catalog file must still carry the three fruits, otherwise
    /// the plans cannot be priced.
    pub fn validate_for_plans(&self) -> CoreResult<()> {
        for plan in CustomerPlan::all() {
            for id in plan.purchasable_items() {
                self.require(id)?;
            }
            if let Some(discount) = plan.discount() {
                self.require(discount.item.as_str())?;
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::fruit_stand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    fn entry(id: &str, name: &str, price_cents: i64) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
        }
    }

    #[test]
    fn test_fruit_stand_prices() {
        let catalog = Catalog::fruit_stand();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(APPLE).unwrap().unit_price, Money::from_major(8));
        assert_eq!(catalog.get(STRAWBERRY).unwrap().unit_price, Money::from_major(13));
        assert_eq!(catalog.get(MANGO).unwrap().unit_price, Money::from_major(20));
        assert!(catalog.validate_for_plans().is_ok());
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = Catalog::fruit_stand();
        let ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![APPLE, STRAWBERRY, MANGO]);
    }

    #[test]
    fn test_from_entries_trims_and_validates() {
        let catalog = Catalog::from_entries(vec![
            entry(" apple ", "Apple", 900),
            entry("strawberry", "Strawberry", 1300),
            entry("mango", "Mango", 2000),
        ])
        .unwrap();
        assert_eq!(catalog.get("apple").unwrap().unit_price.cents(), 900);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::from_entries(vec![entry("apple", "Apple", 800), entry("apple", "Green Apple", 900)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Catalog::from_entries(vec![entry("apple", "Apple", -1)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_rejects_price_above_ceiling() {
        assert!(Catalog::from_entries(vec![entry("apple", "Apple", MAX_PRICE_CENTS)]).is_ok());

        let err = Catalog::from_entries(vec![entry("apple", "Apple", i64::MAX / 2)]).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
    }

    #[test]
    fn test_rejects_too_many_items() {
        let entries: Vec<CatalogEntry> = (0..=MAX_CATALOG_ITEMS)
            .map(|n| entry(&format!("fruit{n}"), "Fruit", 100))
            .collect();
        let err = Catalog::from_entries(entries).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "catalog items"
        ));
    }

    #[test]
    fn test_rejects_blank_name() {
        assert!(Catalog::from_entries(vec![entry("apple", "  ", 800)]).is_err());
    }

    #[test]
    fn test_missing_plan_item() {
        let catalog = Catalog::from_entries(vec![entry("apple", "Apple", 800), entry("strawberry", "Strawberry", 1300)])
            .unwrap();
        assert_eq!(
            catalog.validate_for_plans(),
            Err(CoreError::ItemNotFound(MANGO.to_string()))
        );
    }

    #[test]
    fn test_require_unknown() {
        assert_eq!(
            Catalog::fruit_stand().require("kiwi").unwrap_err(),
            CoreError::ItemNotFound("kiwi".to_string())
        );
    }
}
