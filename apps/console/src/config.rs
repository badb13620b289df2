//! # Console Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Environment Variables
//! | Variable                  | Default        | Meaning                          |
//! |---------------------------|----------------|----------------------------------|
//! | `FRUIT_STORE_NAME`        | `Fruit Stand`  | Receipt header                   |
//! | `FRUIT_CURRENCY_SYMBOL`   | (empty)        | Prefix for every amount          |
//! | `FRUIT_UNIT_LABEL`        | `jin`          | Quantity unit on prompts/receipt |
//! | `FRUIT_CATALOG_PATH`      | (none)         | TOML catalog replacing defaults  |
//! | `FRUIT_RECEIPT_TIMESTAMP` | `true`         | Print issue time on receipts     |
//! | `FRUIT_LOG`               | `RUST_LOG`/`warn` | tracing filter directive      |
//!
//! ## Catalog File
//! ```toml
//! [[items]]
//! id = "apple"
//! name = "Apple"
//! price_cents = 800
//! ```

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use fruit_core::catalog::CatalogEntry;
use fruit_core::{Catalog, CoreError, CustomerPlan, ReceiptOptions};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Printed at the top of every receipt
    pub store_name: String,

    /// Currency symbol prefixed to amounts
    pub currency_symbol: String,

    /// Unit of quantity (the stand sells by the jin)
    pub unit_label: String,

    /// Optional catalog file overriding the built-in prices
    pub catalog_path: Option<PathBuf>,

    /// Stamp receipts with the current time
    pub receipt_timestamp: bool,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: "Fruit Stand".to_string(),
            currency_symbol: String::new(),
            unit_label: "jin".to_string(),
            catalog_path: None,
            receipt_timestamp: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(store_name) = lookup("FRUIT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("FRUIT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(unit) = lookup("FRUIT_UNIT_LABEL") {
            if unit.trim().is_empty() {
                return Err(ConfigError::InvalidValue("FRUIT_UNIT_LABEL".to_string()));
            }
            config.unit_label = unit.trim().to_string();
        }

        config.catalog_path = lookup("FRUIT_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(flag) = lookup("FRUIT_RECEIPT_TIMESTAMP") {
            config.receipt_timestamp = flag
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FRUIT_RECEIPT_TIMESTAMP".to_string()))?;
        }

        if let Some(filter) = lookup("FRUIT_LOG").or_else(|| lookup("RUST_LOG")) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Loads the catalog: the built-in price list, or the configured file.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(Catalog::fruit_stand()),
        }
    }

    /// Receipt settings for a given plan.
    pub fn receipt_options(&self, plan: CustomerPlan) -> ReceiptOptions {
        ReceiptOptions {
            store_name: Some(self.store_name.clone()).filter(|s| !s.trim().is_empty()),
            plan: Some(plan),
            currency_symbol: self.currency_symbol.clone(),
            unit_label: self.unit_label.clone(),
            issued_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<CatalogEntry>,
}

/// Reads and validates a TOML catalog file.
///
/// The file must still carry every item the plans sell.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    let catalog = Catalog::from_entries(file.items)?;
    catalog.validate_for_plans()?;

    Ok(catalog)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read catalog file: {0}")]
    CatalogFile(#[from] config::ConfigError),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CoreError),
}
