//! # acme-checkout: Command-Line Checkout
//!
//! Thin shell around `acme-core`: parses arguments, loads the pricing rules
//! once, and prints catalogue listings or basket totals.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► Cli (clap) ──► CheckoutConfig::from_env                       │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                          load_rules() ──► Arc<PricingRules>             │
//! │                               │                                         │
//! │          ┌────────────────────┼────────────────────┐                    │
//! │          ▼                    ▼                    ▼                    │
//! │      catalogue           total CODE...           check                  │
//! │                                                                         │
//! │  stdout: command output      stderr: logs and errors (exit 1)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! acme-checkout catalogue
//! acme-checkout total B01 B01 R01 R01 R01
//! acme-checkout --rules ./rules.toml total R01 R01 --json
//! RUST_LOG=acme=debug acme-checkout check
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::CheckoutConfig;
use error::{AppError, AppResult};

const DEFAULT_LOG_FILTER: &str = "warn,acme=info";

#[derive(Debug, Parser)]
#[command(name = "acme-checkout", version, about = "Acme Widget Co basket pricing")]
pub struct Cli {
    /// Pricing rules file (overrides ACME_RULES_PATH and the default location)
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products and unit prices
    Catalogue,

    /// Price a basket of product codes
    Total {
        /// Product codes, one per unit (e.g. `R01 R01 B01`)
        codes: Vec<String>,

        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the pricing rules, then summarise them
    Check,
}

/// Entry point used by the binary.
pub fn run() -> ExitCode {
    init_tracing();

    match execute(Cli::parse()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The single stderr line for a failed command. Errors are not also logged.
pub fn error_line(err: &AppError) -> String {
    format!("error: {err}")
}

/// Runs a parsed command and returns what should be printed.
pub fn execute(cli: Cli) -> AppResult<String> {
    let config = CheckoutConfig::from_env(cli.rules);
    let (rules, source) = config.load_rules()?;

    match cli.command {
        Command::Catalogue => Ok(commands::catalogue(&rules, &config)),
        Command::Total { codes, json } => commands::total(Arc::new(rules), &codes, &config, json),
        Command::Check => Ok(commands::check(&rules, &source, &config)),
    }
}

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout carries only command output.
/// Respects `RUST_LOG`; defaults to `warn,acme=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
