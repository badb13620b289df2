//! # Error Types
//!
//! Domain-specific error types for fruit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fruit-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog lookups and plan policy violations     │
//! │  └── ValidationError  - Malformed input values                         │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  ├── ConfigError      - Environment / catalog file problems            │
//! │  └── ConsoleError     - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, plan code, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A request, discount or plan names an item the catalog does not carry.
    ///
    /// ## When This Occurs
    /// - A catalog file omitted one of the fruits a plan relies on
    /// - A caller built a `PurchaseRequest` with a typo in the item id
    #[error("Item not found in catalog: {0}")]
    ItemNotFound(String),

    /// The plan code is not one of A, B, C, D.
    #[error("Unknown plan '{0}', expected one of A, B, C, D")]
    UnknownPlan(String),

    /// Every quantity in the order is zero.
    #[error("Order is empty: buy at least one item")]
    EmptyOrder,

    /// The plan does not allow buying this item.
    ///
    /// ## User Workflow
    /// ```text
    /// Plan A selected, mango = 2
    ///      │
    ///      ▼
    /// validate_order
    ///      │
    ///      ▼
    /// PlanRestriction { plan: 'A', item: "mango" }
    ///      │
    ///      ▼
    /// Console shows: "Plan A does not allow buying mango"
    /// ```
    #[error("Plan {plan} does not allow buying {item}")]
    PlanRestriction { plan: char, item: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements and are
/// raised before the pricing engine runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate item id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
