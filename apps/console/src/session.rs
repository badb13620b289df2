//! # Interactive Session
//!
//! The prompt loop: pick a plan, enter quantities, get a receipt.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menu ──► "Select plan" ──┬── Q / end of input ──► goodbye              │
//! │    ▲                      ├── not A-D ──► error, back to menu           │
//! │    │                      ▼                                             │
//! │    │        for each purchasable item:                                  │
//! │    │            "Quantity of X" ──► parse_quantity                       │
//! │    │                 ▲                 │ bad input                      │
//! │    │                 └─────────────────┘ (ask the same field again)      │
//! │    │                      ▼                                             │
//! │    │               validate_order ── empty / plan restriction ──┐       │
//! │    │                      │                 (ask every field again)     │
//! │    │                      ▼                                             │
//! │    └──────────── receipt (PriceEngine::compute_breakdown)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use chrono::Utc;
use fruit_core::validation::{parse_quantity, validate_order};
use fruit_core::{render_receipt, CustomerPlan, PriceEngine};
use tracing::{debug, info, warn};

use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;

pub struct Session<'a, R, W> {
    engine: &'a PriceEngine,
    config: &'a ConsoleConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(engine: &'a PriceEngine, config: &'a ConsoleConfig, input: R, output: W) -> Self {
        Session {
            engine,
            config,
            input,
            output,
        }
    }

    /// Runs until the operator quits or input ends.
    ///
    /// Returns the number of receipts printed.
    pub fn run(&mut self) -> ConsoleResult<usize> {
        let mut receipts = 0;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Select plan (A/B/C/D/Q): ")? else {
                break;
            };

            if choice.trim().eq_ignore_ascii_case("q") {
                break;
            }

            let plan = match choice.parse::<CustomerPlan>() {
                Ok(plan) => plan,
                Err(err) => {
                    warn!(input = %choice.trim(), "Unknown plan selected");
                    writeln!(self.output, "Error: {err}")?;
                    continue;
                }
            };
            debug!(%plan, "Plan selected");

            let Some(quantities) = self.collect_order(plan)? else {
                break;
            };

            let request = plan.request(quantities.iter().copied());
            let breakdown = self.engine.compute_breakdown(&request)?;

            let mut options = self.config.receipt_options(plan);
            if self.config.receipt_timestamp {
                options.issued_at = Some(Utc::now());
            }
            writeln!(self.output)?;
            write!(self.output, "{}", render_receipt(&breakdown, &options))?;
            writeln!(self.output)?;

            info!(
                %plan,
                subtotal = %breakdown.subtotal,
                deduction_applied = breakdown.deduction_applied,
                total = %breakdown.total,
                "Receipt printed"
            );
            receipts += 1;
        }

        writeln!(self.output, "Thank you, goodbye!")?;
        self.output.flush()?;
        Ok(receipts)
    }

    fn print_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.output, "Choose a customer plan:")?;
        for plan in CustomerPlan::all() {
            writeln!(self.output, "  {}: {}", plan.code(), plan.description())?;
        }
        writeln!(self.output, "  Q: Quit")?;
        Ok(())
    }

    /// Asks for every purchasable item until the order passes plan policy.
    ///
    /// `None` means input ended mid-order.
    fn collect_order(
        &mut self,
        plan: CustomerPlan,
    ) -> ConsoleResult<Option<Vec<(&'static str, u32)>>> {
        loop {
            let mut quantities = Vec::with_capacity(plan.purchasable_items().len());

            for &item in plan.purchasable_items() {
                match self.ask_quantity(item)? {
                    Some(qty) => quantities.push((item, qty)),
                    None => return Ok(None),
                }
            }

            match validate_order(plan, &quantities) {
                Ok(()) => return Ok(Some(quantities)),
                Err(err) => {
                    warn!(%plan, error = %err, "Order rejected");
                    writeln!(self.output, "Error: {err}")?;
                    writeln!(self.output, "Please enter the quantities again.")?;
                }
            }
        }
    }

    fn ask_quantity(&mut self, item: &str) -> ConsoleResult<Option<u32>> {
        let name = self
            .engine
            .catalog()
            .get(item)
            .map_or_else(|| item.to_string(), |i| i.name.clone());
        let question = format!("Quantity of {} ({}): ", name, self.config.unit_label);

        loop {
            let Some(raw) = self.prompt(&question)? else {
                return Ok(None);
            };

            match parse_quantity(&name, &raw) {
                Ok(qty) => return Ok(Some(qty)),
                Err(err) => {
                    debug!(item, input = %raw.trim(), error = %err, "Quantity rejected");
                    writeln!(self.output, "Error: {err}")?;
                }
            }
        }
    }

    /// Writes a prompt and reads one line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
