//! # Fruit Stand Console
//!
//! Text front-end over `fruit-core`.
//!
//! ## Module Organization
//! ```text
//! fruit_console/
//! ├── lib.rs          ◄─── You are here (CLI, logging, dispatch)
//! ├── config.rs       ◄─── Environment + catalog file
//! ├── session.rs      ◄─── Interactive prompt loop
//! ├── quote.rs        ◄─── One-shot quote command
//! └── error.rs        ◄─── ConsoleError
//! ```
//!
//! ## Startup Sequence
//! 1. Parse command line
//! 2. Load configuration from the environment
//! 3. Initialize tracing (stderr, so receipts on stdout stay clean)
//! 4. Load and validate the catalog, build the engine
//! 5. Run the session or the quote command

pub mod config;
pub mod error;
pub mod quote;
pub mod session;

use std::io;

use clap::{Parser, Subcommand};
use fruit_core::{CustomerPlan, PriceEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use error::ConsoleResult;
use session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "fruit-stand",
    about = "Fruit stand price calculator",
    long_about = "Price apples, strawberries and mangoes under customer plans A-D. \
                  Without a subcommand an interactive session starts.",
    after_help = "Examples:\n  fruit-stand\n  fruit-stand quote --plan D --qty apple=5 --qty strawberry=5 --qty mango=3\n  fruit-stand quote --plan C --qty strawberry=2 --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the interactive prompt loop (default)")]
    Interactive,
    #[command(about = "Price a single order and print the receipt")]
    Quote {
        #[arg(long, help = "Customer plan: A, B, C or D")]
        plan: CustomerPlan,
        #[arg(long = "qty", value_name = "ITEM=QUANTITY", help = "Quantity of one item, repeatable")]
        quantities: Vec<String>,
        #[arg(long, help = "Emit the breakdown as JSON")]
        json: bool,
    },
}

/// Parses the command line and runs it.
pub fn run() -> ConsoleResult<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::from_env()?;
    init_tracing(&config.log_filter);

    let catalog = config.load_catalog()?;
    info!(
        items = catalog.len(),
        custom = config.catalog_path.is_some(),
        "Catalog loaded"
    );
    let engine = PriceEngine::new(catalog);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let receipts = Session::new(&engine, &config, stdin.lock(), stdout.lock()).run()?;
            info!(receipts, "Session finished");
        }
        Command::Quote {
            plan,
            quantities,
            json,
        } => {
            let output = quote::run(&engine, &config, plan, &quantities, json)?;
            println!("{output}");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `FRUIT_LOG=debug` - Show every rejected input
/// - `FRUIT_LOG=fruit_console=info` - One line per receipt
/// - Default: `warn`
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::try_parse_from(["fruit-stand"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_quote_arguments() {
        let cli = Cli::try_parse_from([
            "fruit-stand", "quote", "--plan", "d", "--qty", "apple=5", "--qty", "mango=3", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Quote {
                plan,
                quantities,
                json,
            }) => {
                assert_eq!(plan, CustomerPlan::D);
                assert_eq!(quantities, vec!["apple=5", "mango=3"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quote_rejects_unknown_plan() {
        assert!(Cli::try_parse_from(["fruit-stand", "quote", "--plan", "z"]).is_err());
    }
}
