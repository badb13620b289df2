//! # fruit-core: Pure Pricing Logic for the Fruit Stand
//!
//! This crate prices fruit purchases. It contains all pricing rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fruit Stand Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Plan menu ──► Quantity prompts ──► Receipt output           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fruit-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  engine   │  │   plan    │  │ validation│  │   │
//! │  │   │  Catalog  │  │PriceEngine│  │ A B C D   │  │  rules    │  │   │
//! │  │   │   Item    │  │ Breakdown │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, DiscountRate, ItemDiscount, ThresholdDeduction
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable price list
//! - [`engine`] - PriceEngine, PurchaseRequest, PriceBreakdown
//! - [`plan`] - The four customer plans
//! - [`validation`] - Input and plan-policy validation
//! - [`receipt`] - Plain-text receipt rendering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fruit_core::{CustomerPlan, Money, PriceEngine};
//!
//! let engine = PriceEngine::default();
//! let request = CustomerPlan::D.request([("apple", 5), ("strawberry", 5), ("mango", 3)]);
//!
//! // 40 + 52 + 60 = 152, which reaches 100, so 10 comes off
//! assert_eq!(engine.compute_total(&request).unwrap(), Money::from_major(142));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod plan;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use engine::{LineItem, PriceBreakdown, PriceEngine, PurchaseRequest};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use plan::CustomerPlan;
pub use receipt::{render_receipt, ReceiptOptions};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in one order.
///
/// ## Business Reason
/// Catches typing mistakes (1000 instead of 10) at the prompt.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price a catalog item may carry, in minor units (1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Most items a catalog may hold.
///
/// With [`MAX_PRICE_CENTS`] this keeps `items × price × u32::MAX` inside
/// `i64`, so no line or subtotal can overflow.
pub const MAX_CATALOG_ITEMS: usize = 20;
