//! # Console Error Type
//!
//! Everything the console front-end can fail with.
//!
//! ```text
//! ValidationError ─► CoreError ─┐
//!                  ConfigError ─┼─► ConsoleError ─► anyhow (main) ─► exit 1
//!                 io / serde ───┘
//! ```
//!
//! Malformed input at the interactive prompt never becomes a
//! `ConsoleError`: the session reports it and asks again.

use fruit_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid --qty argument '{arg}': {reason}")]
    QuantityArg { arg: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
