//! # One-shot Quote
//!
//! `fruit-stand quote --plan D --qty apple=5 --qty strawberry=5 --qty mango=3`
//!
//! Same validation as the interactive session, but any failure is an
//! error instead of a re-prompt. Each item may be given at most once.

use serde::Serialize;
use std::collections::HashSet;

use chrono::Utc;
use fruit_core::validation::{parse_quantity, validate_order};
use fruit_core::{render_receipt, CustomerPlan, PriceBreakdown, PriceEngine};
use tracing::info;

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};

/// JSON shape of `quote --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput<'a> {
    pub plan: CustomerPlan,
    pub breakdown: &'a PriceBreakdown,
}

/// Parses one `item=quantity` argument.
pub fn parse_qty_arg(arg: &str) -> ConsoleResult<(String, u32)> {
    let (item, raw_qty) = arg.split_once('=').ok_or_else(|| ConsoleError::QuantityArg {
        arg: arg.to_string(),
        reason: "expected ITEM=QUANTITY".to_string(),
    })?;

    let item = item.trim();
    if item.is_empty() {
        return Err(ConsoleError::QuantityArg {
            arg: arg.to_string(),
            reason: "item id is empty".to_string(),
        });
    }

    let qty = parse_quantity(item, raw_qty).map_err(|err| ConsoleError::QuantityArg {
        arg: arg.to_string(),
        reason: err.to_string(),
    })?;

    Ok((item.to_string(), qty))
}

/// Prices one order and returns the text to print.
pub fn run(
    engine: &PriceEngine,
    config: &ConsoleConfig,
    plan: CustomerPlan,
    qty_args: &[String],
    json: bool,
) -> ConsoleResult<String> {
    let parsed = qty_args
        .iter()
        .map(|arg| parse_qty_arg(arg))
        .collect::<ConsoleResult<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for ((item, _), arg) in parsed.iter().zip(qty_args) {
        if !seen.insert(item.as_str()) {
            return Err(ConsoleError::QuantityArg {
                arg: arg.clone(),
                reason: format!("item '{item}' given more than once"),
            });
        }
        engine.catalog().require(item)?;
    }

    let quantities: Vec<(&str, u32)> = parsed.iter().map(|(item, qty)| (item.as_str(), *qty)).collect();
    validate_order(plan, &quantities)?;

    let breakdown = engine.compute_breakdown(&plan.request(quantities.iter().copied()))?;
    info!(%plan, total = %breakdown.total, json, "Quote computed");

    if json {
        let output = QuoteOutput {
            plan,
            breakdown: &breakdown,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut options = config.receipt_options(plan);
    if config.receipt_timestamp {
        options.issued_at = Some(Utc::now());
    }
    Ok(render_receipt(&breakdown, &options))
}
