//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acme-core errors (this file)                                          │
//! │  ├── CoreError           - Runtime basket errors                       │
//! │  ├── ConfigurationError  - Malformed catalogue / tiers / offers        │
//! │  └── ValidationError     - Field-level failures inside a definition    │
//! │                                                                         │
//! │  acme-checkout errors (app)                                            │
//! │  └── AppError            - What the command line reports               │
//! │                                                                         │
//! │  Flow: ValidationError → ConfigurationError → CoreError → AppError     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Each Error Happens
//! - `ConfigurationError` is raised once, when `PricingRules` is built.
//! - `CoreError::UnknownProduct` is raised per call, by `Basket::add` and
//!   `Basket::total_for`.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by basket operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not in the catalogue.
    ///
    /// ## When This Occurs
    /// - `Basket::add` with a code the catalogue does not know
    /// - `Basket::total_for` with such a code anywhere in the sequence
    ///
    /// Callers that only offer catalogue-sourced codes never see this.
    #[error("Product code \"{0}\" not found in catalogue")]
    UnknownProduct(String),

    /// An intermediate amount left the range `Decimal` can hold.
    ///
    /// Validated prices and charges cannot reach this; only a custom offer
    /// returning an extreme discount can.
    #[error("Amount overflow while computing the {stage}")]
    AmountOverflow { stage: &'static str },

    /// Pricing rules failed validation.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

// =============================================================================
// Configuration Error
// =============================================================================

/// A malformed rule set.
///
/// The engine never checks these per call; `PricingRules::new` checks
/// them once and refuses to build.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Delivery table has no rules at all.
    #[error("Delivery rules must contain at least one tier")]
    EmptyDeliveryRules,

    /// No tier starts at zero, so small baskets would match nothing.
    #[error("Lowest delivery tier starts at {lowest}, expected a tier at $0.00 or below")]
    MissingBaseTier { lowest: Money },

    /// Two tiers share a minimum total.
    #[error("Duplicate delivery tier for minimum total {min_total}")]
    DuplicateTier { min_total: Money },

    /// A tier charges a negative amount.
    #[error("Delivery tier {min_total} has negative charge {charge}")]
    NegativeCharge { min_total: Money, charge: Money },

    /// A tier's threshold or charge failed a field check.
    #[error("Invalid delivery tier {min_total}: {source}")]
    InvalidTier {
        min_total: Money,
        source: ValidationError,
    },

    /// Two products share a code.
    #[error("Duplicate product code \"{0}\" in catalogue")]
    DuplicateProduct(String),

    /// An offer targets a product that is not in the catalogue.
    #[error("Offer \"{offer}\" references unknown product \"{code}\"")]
    UnknownOfferProduct { offer: String, code: String },

    /// Multi-buy with `buy <= pay_for` or `buy == 0`.
    #[error("Multi-buy for \"{code}\" must pay for fewer than it sells: {buy} for {pay_for}")]
    InvalidMultiBuy { code: String, buy: u32, pay_for: u32 },

    /// Percentage discount above 100%.
    #[error("Percentage offer for \"{code}\" exceeds 100%: {discount_bps} bps")]
    InvalidPercentage { code: String, discount_bps: u32 },

    /// A product field failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a product code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Amount must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: Money },

    /// Amount is above the allowed maximum.
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: String,
        max: Money,
        value: Money,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
