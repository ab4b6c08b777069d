//! # Pricing Rules
//!
//! The immutable configuration every basket prices against: catalogue,
//! delivery tiers and offers, validated once and shared behind an `Arc`.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RulesDefinition (serde)                                                │
//! │       │  from rules.toml, or RulesDefinition::acme_widget_co()          │
//! │       ▼                                                                 │
//! │  PricingRules::from_definition ──► validation ──► ConfigurationError?   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<PricingRules> ──┬──► Basket (session 1)                            │
//! │                      ├──► Basket (session 2)                            │
//! │                      └──► ...                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::delivery::DeliveryRules;
use crate::error::ConfigurationError;
use crate::money::Money;
use crate::offer::{Offer, OfferDefinition};
use crate::types::{DeliveryRule, Product};
use crate::validation::{validate_delivery_rules, validate_offer_references};

// =============================================================================
// Pricing Rules
// =============================================================================

/// Validated catalogue, delivery table and offer list.
#[derive(Clone)]
pub struct PricingRules {
    catalogue: Catalogue,
    delivery: DeliveryRules,
    offers: Vec<Arc<dyn Offer>>,
}

impl PricingRules {
    /// Bundles and validates a rule set.
    ///
    /// ## Errors
    /// Any [`ConfigurationError`] from the delivery table or offer
    /// references. Catalogue errors are raised earlier, by `Catalogue::new`.
    pub fn new(
        catalogue: Catalogue,
        delivery: DeliveryRules,
        offers: Vec<Arc<dyn Offer>>,
    ) -> Result<Self, ConfigurationError> {
        validate_delivery_rules(delivery.as_slice())?;
        validate_offer_references(&offers, &catalogue)?;

        Ok(PricingRules {
            catalogue,
            delivery,
            offers,
        })
    }

    /// Builds rules from a deserialized definition.
    pub fn from_definition(definition: RulesDefinition) -> Result<Self, ConfigurationError> {
        let catalogue = Catalogue::new(definition.products)?;
        let delivery = DeliveryRules::new(definition.delivery);
        let offers = definition
            .offers
            .iter()
            .map(OfferDefinition::build)
            .collect::<Result<Vec<_>, _>>()?;

        PricingRules::new(catalogue, delivery, offers)
    }

    #[inline]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[inline]
    pub fn delivery(&self) -> &DeliveryRules {
        &self.delivery
    }

    #[inline]
    pub fn offers(&self) -> &[Arc<dyn Offer>] {
        &self.offers
    }
}

impl fmt::Debug for PricingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingRules")
            .field("catalogue", &self.catalogue)
            .field("delivery", &self.delivery)
            .field(
                "offers",
                &self.offers.iter().map(|o| o.describe()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// =============================================================================
// Rules Definition
// =============================================================================

/// Serializable rule set, as written in `rules.toml`.
///
/// ```toml
/// [[products]]
/// code = "R01"
/// name = "Red Widget"
/// price = "32.95"
///
/// [[delivery]]
/// min_total = "0"
/// charge = "4.95"
///
/// [[offers]]
/// kind = "buy_one_get_second_half_price"
/// product = "R01"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesDefinition {
    pub products: Vec<Product>,

    pub delivery: Vec<DeliveryRule>,

    #[serde(default)]
    pub offers: Vec<OfferDefinition>,
}

impl RulesDefinition {
    /// The Acme Widget Co rule set.
    ///
    /// ## Contents
    /// - R01 Red Widget 32.95, G01 Green Widget 24.95, B01 Blue Widget 7.95
    /// - Delivery: under 50 → 4.95, under 90 → 2.95, 90 or more → free
    /// - Buy one red widget, get the second half price
    pub fn acme_widget_co() -> Self {
        RulesDefinition {
            products: vec![
                Product::new("R01", "Red Widget", Money::from_cents(3295)),
                Product::new("G01", "Green Widget", Money::from_cents(2495)),
                Product::new("B01", "Blue Widget", Money::from_cents(795)),
            ],
            delivery: vec![
                DeliveryRule::new(Money::from_cents(9000), Money::zero()),
                DeliveryRule::new(Money::from_cents(5000), Money::from_cents(295)),
                DeliveryRule::new(Money::zero(), Money::from_cents(495)),
            ],
            offers: vec![OfferDefinition::BuyOneGetSecondHalfPrice {
                product: "R01".to_string(),
            }],
        }
    }
}

impl Default for RulesDefinition {
    fn default() -> Self {
        RulesDefinition::acme_widget_co()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
