//! # Checkout Configuration
//!
//! Resolves where pricing rules come from and how amounts are displayed.
//!
//! ## Rules Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. --rules <PATH>                 (must exist)                         │
//! │  2. ACME_RULES_PATH                (must exist)                         │
//! │  3. <config dir>/rules.toml        (optional)                           │
//! │       Linux:   ~/.config/checkout/rules.toml                            │
//! │       macOS:   ~/Library/Application Support/com.acme.checkout/...      │
//! │  4. Built-in Acme Widget Co rules                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are loaded and validated once per process; there is no reloading.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use acme_core::{Money, PricingRules, RulesDefinition};
use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

const RULES_PATH_ENV: &str = "ACME_RULES_PATH";
const CURRENCY_SYMBOL_ENV: &str = "ACME_CURRENCY_SYMBOL";
const RULES_FILE_NAME: &str = "rules.toml";

/// Where the active rules were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// A file the user named explicitly.
    Explicit(PathBuf),
    /// The per-user default file.
    DefaultFile(PathBuf),
    /// No file; `RulesDefinition::acme_widget_co()`.
    BuiltIn,
}

impl fmt::Display for RulesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesSource::Explicit(path) | RulesSource::DefaultFile(path) => {
                write!(f, "{}", path.display())
            }
            RulesSource::BuiltIn => write!(f, "built-in Acme Widget Co rules"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Explicit rules file, from the command line or environment.
    pub rules_path: Option<PathBuf>,

    /// Symbol shown in front of amounts.
    pub currency_symbol: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            rules_path: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl CheckoutConfig {
    /// Builds configuration from the command line and environment.
    ///
    /// ## Environment Variables
    /// - `ACME_RULES_PATH`: rules file, used when `--rules` is absent
    /// - `ACME_CURRENCY_SYMBOL`: display symbol (default `$`)
    pub fn from_env(cli_rules_path: Option<PathBuf>) -> Self {
        CheckoutConfig::from_vars(
            cli_rules_path,
            std::env::var_os(RULES_PATH_ENV),
            std::env::var(CURRENCY_SYMBOL_ENV).ok(),
        )
    }

    /// Applies the override order to already-read values.
    ///
    /// `--rules` beats `ACME_RULES_PATH`; a missing symbol keeps `$`.
    pub fn from_vars(
        cli_rules_path: Option<PathBuf>,
        rules_path_env: Option<OsString>,
        currency_symbol_env: Option<String>,
    ) -> Self {
        let mut config = CheckoutConfig::default();

        config.rules_path = cli_rules_path.or_else(|| {
            rules_path_env.map(|path| {
                debug!(path = ?path, "Rules path taken from environment");
                PathBuf::from(path)
            })
        });

        if let Some(symbol) = currency_symbol_env {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Picks the rules source without reading anything.
    pub fn rules_source(&self, default_path: Option<PathBuf>) -> RulesSource {
        resolve_rules_source(self.rules_path.clone(), default_path)
    }

    /// Loads and validates the pricing rules.
    ///
    /// ## Errors
    /// - `RulesNotFound` if an explicit path does not exist
    /// - `Io` / `Toml` if the file cannot be read or parsed
    /// - `Configuration` if the rule set fails validation
    pub fn load_rules(&self) -> AppResult<(PricingRules, RulesSource)> {
        let source = self.rules_source(default_rules_path());

        let rules = match &source {
            RulesSource::Explicit(path) | RulesSource::DefaultFile(path) => {
                info!(?path, "Loading pricing rules from file");
                read_rules_file(path)?
            }
            RulesSource::BuiltIn => {
                debug!("No rules file found, using built-in rules");
                PricingRules::from_definition(RulesDefinition::acme_widget_co())?
            }
        };

        info!(
            products = rules.catalogue().len(),
            tiers = rules.delivery().len(),
            offers = rules.offers().len(),
            "Pricing rules ready"
        );

        Ok((rules, source))
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use acme_checkout::config::CheckoutConfig;
    /// use acme_core::Money;
    ///
    /// let config = CheckoutConfig { currency_symbol: "£".to_string(), ..Default::default() };
    /// assert_eq!(config.format_money(Money::from_cents(-1234)), "-£12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.to_string().replacen('$', &self.currency_symbol, 1)
    }
}

/// An explicit path always wins, even if missing; the default file is only
/// used when it exists.
pub fn resolve_rules_source(explicit: Option<PathBuf>, default_path: Option<PathBuf>) -> RulesSource {
    if let Some(path) = explicit {
        return RulesSource::Explicit(path);
    }

    match default_path {
        Some(path) if path.exists() => RulesSource::DefaultFile(path),
        _ => RulesSource::BuiltIn,
    }
}

/// `<config dir>/rules.toml` for this platform, if a home directory exists.
pub fn default_rules_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "acme", "checkout").map(|dirs| dirs.config_dir().join(RULES_FILE_NAME))
}

/// Parses and validates a TOML rule set.
pub fn parse_rules(contents: &str) -> AppResult<PricingRules> {
    let definition: RulesDefinition = toml::from_str(contents)?;
    Ok(PricingRules::from_definition(definition)?)
}

fn read_rules_file(path: &Path) -> AppResult<PricingRules> {
    if !path.exists() {
        return Err(AppError::RulesNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rules(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_core::ConfigurationError;

    const EXAMPLE: &str = include_str!("../rules.example.toml");

    fn example_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("rules.example.toml")
    }

    #[test]
    fn test_example_file_matches_built_in_rules() {
        let definition: RulesDefinition = toml::from_str(EXAMPLE).unwrap();
        assert_eq!(definition, RulesDefinition::acme_widget_co());
    }

    #[test]
    fn test_load_explicit_file() {
        let config = CheckoutConfig {
            rules_path: Some(example_path()),
            ..Default::default()
        };

        let (rules, source) = config.load_rules().unwrap();
        assert_eq!(source, RulesSource::Explicit(example_path()));
        assert_eq!(rules.catalogue().len(), 3);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let config = CheckoutConfig {
            rules_path: Some(PathBuf::from("/definitely/not/here/rules.toml")),
            ..Default::default()
        };

        assert!(matches!(config.load_rules(), Err(AppError::RulesNotFound(_))));
    }

    #[test]
    fn test_cli_rules_path_beats_environment() {
        let config = CheckoutConfig::from_vars(
            Some(PathBuf::from("/cli/rules.toml")),
            Some(OsString::from("/env/rules.toml")),
            None,
        );
        assert_eq!(config.rules_path, Some(PathBuf::from("/cli/rules.toml")));
    }

    #[test]
    fn test_environment_rules_path_used_without_cli() {
        let config = CheckoutConfig::from_vars(None, Some(OsString::from("/env/rules.toml")), None);
        assert_eq!(config.rules_path, Some(PathBuf::from("/env/rules.toml")));

        let config = CheckoutConfig::from_vars(None, None, None);
        assert_eq!(config, CheckoutConfig::default());
    }

    #[test]
    fn test_currency_symbol_override() {
        let config = CheckoutConfig::from_vars(None, None, Some("£".to_string()));
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.format_money(Money::from_cents(3785)), "£37.85");

        assert_eq!(CheckoutConfig::from_vars(None, None, None).currency_symbol, "$");
    }

    #[test]
    fn test_resolve_rules_source() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(
            resolve_rules_source(Some(explicit.clone()), Some(example_path())),
            RulesSource::Explicit(explicit)
        );
        assert_eq!(
            resolve_rules_source(None, Some(example_path())),
            RulesSource::DefaultFile(example_path())
        );
        assert_eq!(
            resolve_rules_source(None, Some(PathBuf::from("/definitely/not/here.toml"))),
            RulesSource::BuiltIn
        );
        assert_eq!(resolve_rules_source(None, None), RulesSource::BuiltIn);
    }

    #[test]
    fn test_parse_rules_rejects_bad_tiers() {
        let contents = r#"
            [[products]]
            code = "B01"
            name = "Blue Widget"
            price = "7.95"

            [[delivery]]
            min_total = "50"
            charge = "2.95"
        "#;

        assert!(matches!(
            parse_rules(contents),
            Err(AppError::Configuration(ConfigurationError::MissingBaseTier { .. }))
        ));
    }

    #[test]
    fn test_parse_rules_rejects_malformed_toml() {
        assert!(matches!(parse_rules("products = 3"), Err(AppError::Toml(_))));
    }

    #[test]
    fn test_parse_rules_with_extra_offers() {
        let contents = format!(
            "{EXAMPLE}\n[[offers]]\nkind = \"multi_buy\"\nproduct = \"B01\"\nbuy = 3\npay_for = 2\n"
        );
        let rules = parse_rules(&contents).unwrap();
        assert_eq!(rules.offers().len(), 2);
    }

    #[test]
    fn test_format_money_default_symbol() {
        let config = CheckoutConfig::default();
        assert_eq!(config.format_money(Money::from_cents(8523)), "$85.23");
        assert_eq!(config.format_money(Money::zero()), "$0.00");
    }
}
