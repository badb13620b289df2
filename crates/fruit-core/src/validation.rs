//! # Validation Module
//!
//! Input validation that runs before the price engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field parsing (parse_quantity)                               │
//! │  ├── Not an integer       → re-prompt that field                       │
//! │  └── Negative / too large → re-prompt that field                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Order policy (validate_order)                                │
//! │  ├── Everything zero      → re-collect the order                       │
//! │  └── Item outside plan    → re-collect the order                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  PriceEngine (assumes well-formed input, never re-validates)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog files go through the item validators below when a
//! [`Catalog`](crate::catalog::Catalog) is built.
//!
//! ## Usage
//! ```rust
//! use fruit_core::validation::{parse_quantity, validate_order};
//! use fruit_core::CustomerPlan;
//!
//! let apples = parse_quantity("apple", " 5 ").unwrap();
//! assert_eq!(apples, 5);
//!
//! assert!(validate_order(CustomerPlan::A, &[("apple", apples), ("strawberry", 0)]).is_ok());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::plan::CustomerPlan;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ITEM_ID_LEN: usize = 50;
const MAX_ITEM_NAME_LEN: usize = 100;

// =============================================================================
// Quantity Input
// =============================================================================

/// Parses a raw quantity typed by the operator.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a whole number
/// - Must not be negative
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ```rust
/// use fruit_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("mango", "3"), Ok(3));
/// assert!(parse_quantity("mango", "-1").is_err());
/// assert!(parse_quantity("mango", "2.5").is_err());
/// ```
pub fn parse_quantity(field: &str, raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    validate_quantity(field, value as u64)?;

    Ok(value as u32)
}

/// Validates an already-numeric quantity against MAX_ITEM_QUANTITY.
pub fn validate_quantity(field: &str, qty: u64) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY as u64 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Order Policy
// =============================================================================

/// Checks an order against the selected plan.
///
/// ## Rules
/// - At least one quantity must be non-zero
/// - Items the plan does not sell must have quantity zero
pub fn validate_order(plan: CustomerPlan, quantities: &[(&str, u32)]) -> CoreResult<()> {
    if quantities.iter().all(|&(_, qty)| qty == 0) {
        return Err(CoreError::EmptyOrder);
    }

    if let Some(&(item, _)) = quantities
        .iter()
        .find(|&&(item, qty)| qty > 0 && !plan.allows(item))
    {
        return Err(CoreError::PlanRestriction {
            plan: plan.code(),
            item: item.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Entries
// =============================================================================

/// Validates an item id.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only lowercase ASCII letters, digits, hyphens, underscores
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item id".to_string(),
        });
    }

    if id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "item id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "item id".to_string(),
            reason: "must contain only lowercase letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates an item display name (non-blank, at most 100 characters).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price in minor units. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("apple", "0"), Ok(0));
        assert_eq!(parse_quantity("apple", " 12\n"), Ok(12));
        assert_eq!(parse_quantity("apple", "999"), Ok(999));
    }

    #[test]
    fn test_parse_quantity_rejects() {
        assert!(matches!(
            parse_quantity("apple", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("apple", "abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("apple", "1.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(
            parse_quantity("apple", "-3"),
            Err(ValidationError::MustBeNonNegative {
                field: "apple".to_string()
            })
        );
        assert!(matches!(
            parse_quantity("apple", "1000"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_quantity("apple", "99999999999999999999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_order_empty() {
        assert_eq!(
            validate_order(CustomerPlan::B, &[("apple", 0), ("strawberry", 0), ("mango", 0)]),
            Err(CoreError::EmptyOrder)
        );
        assert_eq!(validate_order(CustomerPlan::B, &[]), Err(CoreError::EmptyOrder));
    }

    #[test]
    fn test_validate_order_plan_restriction() {
        assert_eq!(
            validate_order(CustomerPlan::A, &[("apple", 1), ("mango", 2)]),
            Err(CoreError::PlanRestriction {
                plan: 'A',
                item: "mango".to_string()
            })
        );
        // Zero of a disallowed item is fine
        assert!(validate_order(CustomerPlan::A, &[("apple", 1), ("mango", 0)]).is_ok());
        assert!(validate_order(CustomerPlan::D, &[("mango", 2)]).is_ok());
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("apple").is_ok());
        assert!(validate_item_id("dragon_fruit-2").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("Apple").is_err());
        assert!(validate_item_id("star fruit").is_err());
        assert!(validate_item_id(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Strawberry").is_ok());
        assert!(validate_item_name("草莓").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1300).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(-100).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(i64::MAX).is_err());
    }
}
