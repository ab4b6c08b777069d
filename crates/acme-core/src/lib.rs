//! # acme-core: Pure Pricing Engine for Acme Widget Co
//!
//! This crate computes checkout totals. It contains all pricing logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Basket Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (acme-checkout, or any UI)            │   │
//! │  │    List catalogue ──► add(code) ──► total() / breakdown()       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ catalogue │  │   offer   │  │ delivery  │  │  basket   │  │   │
//! │  │   │  Product  │  │  Offer    │  │  tiers    │  │  Basket   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │          └──────────────┴───── rules ─┴──── pricing ┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal Money, rounded half away from zero
//! - [`types`] - Product, DeliveryRule, PriceBreakdown
//! - [`catalogue`] - Code → product lookup
//! - [`offer`] - The Offer trait and built-in offers
//! - [`delivery`] - Delivery tier table
//! - [`rules`] - Validated, shareable rule set
//! - [`pricing`] - The total-calculation pipeline
//! - [`basket`] - The per-session basket
//! - [`validation`] - Configuration checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use acme_core::{Basket, Money, PricingRules, RulesDefinition};
//!
//! let rules = PricingRules::from_definition(RulesDefinition::acme_widget_co())?;
//! let mut basket = Basket::new(Arc::new(rules));
//!
//! for code in ["B01", "B01", "R01", "R01", "R01"] {
//!     basket.add(code)?;
//! }
//!
//! // 98.75 - 16.475 + 2.95 = 85.225 → 85.23
//! assert_eq!(basket.total(), Money::from_cents(8523));
//! # Ok::<(), acme_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalogue;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;
pub mod pricing;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::Basket;
pub use catalogue::Catalogue;
pub use delivery::DeliveryRules;
pub use error::{ConfigurationError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offer::{BuyOneGetSecondHalfPrice, MultiBuy, Offer, OfferDefinition, PercentageOff};
pub use pricing::price_items;
pub use rules::{PricingRules, RulesDefinition};
pub use rust_decimal::Decimal;
pub use types::*;
