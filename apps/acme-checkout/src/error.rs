//! # Application Errors
//!
//! Everything the command line can fail with.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rules.toml ──► toml::de::Error ─┐                                      │
//! │  file read  ──► io::Error ───────┤                                      │
//! │  PricingRules ► ConfigurationError ──► AppError ──► stderr + exit 1    │
//! │  Basket::add ─► CoreError ───────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use acme_core::{ConfigurationError, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Basket rejected an item.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rules file parsed but describes an invalid rule set.
    #[error("Invalid pricing rules: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Explicitly requested rules file does not exist.
    #[error("Rules file not found: {}", .0.display())]
    RulesNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rules file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
