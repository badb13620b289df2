//! # Receipt Rendering
//!
//! Builds the plain-text receipt for a [`PriceBreakdown`]. Pure string
//! building: the caller decides where the text goes.
//!
//! ## Layout
//! ```text
//! ==============================
//! Fruit Stand
//! Customer D receipt
//! 2026-10-16 09:30
//! ------------------------------
//! Apple: 5 jin x 8.00/jin = 40.00
//! Strawberry: 5 jin x 13.00/jin (20% off) = 52.00
//! Mango: 3 jin x 20.00/jin = 60.00
//! ------------------------------
//! Subtotal: 152.00
//! Spend 100.00, save 10.00: -10.00
//! Total: 142.00
//! ==============================
//! ```

use chrono::{DateTime, Utc};

use crate::engine::{LineItem, PriceBreakdown};
use crate::money::Money;
use crate::plan::CustomerPlan;
use crate::types::DiscountRate;

const RULE_WIDTH: usize = 30;

/// Presentation settings for [`render_receipt`].
#[derive(Debug, Clone)]
pub struct ReceiptOptions {
    pub store_name: Option<String>,
    pub plan: Option<CustomerPlan>,
    /// Prefixed to every amount (empty for none).
    pub currency_symbol: String,
    /// Unit of quantity, e.g. `jin` or `kg`.
    pub unit_label: String,
    pub issued_at: Option<DateTime<Utc>>,
}

impl Default for ReceiptOptions {
    fn default() -> Self {
        ReceiptOptions {
            store_name: None,
            plan: None,
            currency_symbol: String::new(),
            unit_label: "jin".to_string(),
            issued_at: None,
        }
    }
}

impl ReceiptOptions {
    fn amount(&self, money: Money) -> String {
        if money.is_negative() {
            format!("-{}{}", self.currency_symbol, money.abs())
        } else {
            format!("{}{}", self.currency_symbol, money)
        }
    }

    fn line(&self, line: &LineItem) -> String {
        let discount = match line.discount {
            Some(rate) if !rate.is_full() => format!(" ({} off)", percent_off(rate)),
            _ => String::new(),
        };
        format!(
            "{}: {} {} x {}/{}{} = {}",
            line.name,
            line.quantity,
            self.unit_label,
            self.amount(line.unit_price),
            self.unit_label,
            discount,
            self.amount(line.subtotal),
        )
    }
}

/// Formats the discount of a rate as a percentage: 8000 bps → `20%`.
pub fn percent_off(rate: DiscountRate) -> String {
    let off = rate.off_bps();
    match (off / 100, off % 100) {
        (whole, 0) => format!("{whole}%"),
        (whole, frac) if frac % 10 == 0 => format!("{whole}.{}%", frac / 10),
        (whole, frac) => format!("{whole}.{frac:02}%"),
    }
}

/// Renders a receipt. Only lines with a non-zero quantity are listed; the
/// deduction line appears only when the threshold was reached.
pub fn render_receipt(breakdown: &PriceBreakdown, options: &ReceiptOptions) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![heavy.clone()];

    lines.extend(options.store_name.clone());
    lines.push(match options.plan {
        Some(plan) => format!("Customer {plan} receipt"),
        None => "Receipt".to_string(),
    });
    lines.extend(
        options
            .issued_at
            .map(|issued_at| issued_at.format("%Y-%m-%d %H:%M").to_string()),
    );
    lines.push(light.clone());

    lines.extend(breakdown.purchased().map(|line| options.line(line)));

    lines.push(light);
    lines.push(format!("Subtotal: {}", options.amount(breakdown.subtotal)));
    if let Some(rule) = breakdown.deduction_rule.filter(|_| breakdown.deduction_applied) {
        lines.push(format!(
            "Spend {}, save {}: -{}",
            options.amount(rule.threshold),
            options.amount(rule.amount),
            options.amount(breakdown.deduction),
        ));
    }
    lines.push(format!("Total: {}", options.amount(breakdown.total)));
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{APPLE, MANGO, STRAWBERRY};
    use crate::engine::PriceEngine;
    use chrono::TimeZone;

    fn plan_d_breakdown() -> PriceBreakdown {
        let request = CustomerPlan::D.request([(APPLE, 5), (STRAWBERRY, 5), (MANGO, 3)]);
        PriceEngine::default().compute_breakdown(&request).unwrap()
    }

    #[test]
    fn test_plan_d_receipt() {
        let options = ReceiptOptions {
            store_name: Some("Fruit Stand".to_string()),
            plan: Some(CustomerPlan::D),
            issued_at: Some(Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()),
            ..ReceiptOptions::default()
        };
        let receipt = render_receipt(&plan_d_breakdown(), &options);

        let expected = "\
==============================
Fruit Stand
Customer D receipt
2026-10-16 09:30
------------------------------
Apple: 5 jin x 8.00/jin = 40.00
Strawberry: 5 jin x 13.00/jin (20% off) = 52.00
Mango: 3 jin x 20.00/jin = 60.00
------------------------------
Subtotal: 152.00
Spend 100.00, save 10.00: -10.00
Total: 142.00
==============================
";
        assert_eq!(receipt, expected);
    }

    #[test]
    fn test_skips_zero_lines_and_unreached_deduction() {
        let request = CustomerPlan::D.request([(APPLE, 0), (STRAWBERRY, 1), (MANGO, 0)]);
        let breakdown = PriceEngine::default().compute_breakdown(&request).unwrap();
        let receipt = render_receipt(&breakdown, &ReceiptOptions::default());

        assert!(receipt.starts_with("==============================\nReceipt\n----"));
        assert!(receipt.ends_with("Total: 10.40\n==============================\n"));
        assert!(!receipt.contains("Apple"));
        assert!(!receipt.contains("Mango"));
        assert!(!receipt.contains("Spend"));
        assert!(receipt.contains("Strawberry: 1 jin x 13.00/jin (20% off) = 10.40"));
        assert!(receipt.contains("Total: 10.40"));
    }

    #[test]
    fn test_currency_symbol_and_negative_total() {
        let request = crate::engine::PurchaseRequest::new()
            .with_quantity(APPLE, 1)
            .with_deduction(crate::types::ThresholdDeduction::new(
                Money::from_major(5),
                Money::from_major(10),
            ));
        let breakdown = PriceEngine::default().compute_breakdown(&request).unwrap();
        let options = ReceiptOptions {
            currency_symbol: "$".to_string(),
            ..ReceiptOptions::default()
        };
        let receipt = render_receipt(&breakdown, &options);

        assert!(receipt.contains("Apple: 1 jin x $8.00/jin = $8.00"));
        assert!(receipt.contains("Total: -$2.00"));
    }

    #[test]
    fn test_percent_off() {
        assert_eq!(percent_off(DiscountRate::from_bps(8000).unwrap()), "20%");
        assert_eq!(percent_off(DiscountRate::from_bps(8250).unwrap()), "17.5%");
        assert_eq!(percent_off(DiscountRate::from_bps(8766).unwrap()), "12.34%");
        assert_eq!(percent_off(DiscountRate::FULL), "0%");
    }
}
