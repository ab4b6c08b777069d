//! # Offers
//!
//! Pluggable discount rules evaluated over the whole basket.
//!
//! ## Offer Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   items: [R01, B01, R01]  ──┐                                           │
//! │                             ├──► Offer::discount() ──► Money (>= 0)     │
//! │   catalogue ────────────────┘                                           │
//! │                                                                         │
//! │   • Stateless: everything is derived from the arguments on each call   │
//! │   • Independent: offers never see each other's discounts               │
//! │   • Shared: every offer is Send + Sync and lives behind an Arc         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New offers implement [`Offer`]. Plain closures work too:
//!
//! ```rust
//! use std::sync::Arc;
//! use acme_core::{Catalogue, Money, Offer};
//!
//! // $1 off any basket with five or more items
//! let bulk: Arc<dyn Offer> = Arc::new(|items: &[String], _: &Catalogue| {
//!     if items.len() >= 5 { Money::from_cents(100) } else { Money::zero() }
//! });
//!
//! let catalogue = Catalogue::default();
//! assert!(bulk.discount(&[], &catalogue).is_zero());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::error::ConfigurationError;
use crate::money::Money;

const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// Offer Trait
// =============================================================================

/// A discount rule over the full basket contents.
pub trait Offer: Send + Sync {
    /// Discount for this item sequence. Never negative.
    fn discount(&self, items: &[String], catalogue: &Catalogue) -> Money;

    /// Human-readable label, used in configuration errors.
    fn describe(&self) -> String {
        "custom offer".to_string()
    }

    /// Product codes this offer targets. Checked against the catalogue
    /// when pricing rules are built.
    fn product_codes(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl<F> Offer for F
where
    F: Fn(&[String], &Catalogue) -> Money + Send + Sync,
{
    fn discount(&self, items: &[String], catalogue: &Catalogue) -> Money {
        self(items, catalogue)
    }
}

/// Occurrences of `code` in the item sequence.
fn count_of(items: &[String], code: &str) -> u64 {
    items.iter().filter(|item| item.as_str() == code).count() as u64
}

// =============================================================================
// Buy One Get Second Half Price
// =============================================================================

/// Every second unit of a product is half price.
///
/// ## Example
/// ```text
/// R01 × 3  →  one complete pair  →  discount = 32.95 × 0.5 = 16.475
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetSecondHalfPrice {
    product_code: String,
}

impl BuyOneGetSecondHalfPrice {
    pub fn new(product_code: impl Into<String>) -> Self {
        BuyOneGetSecondHalfPrice {
            product_code: product_code.into(),
        }
    }
}

impl Offer for BuyOneGetSecondHalfPrice {
    fn discount(&self, items: &[String], catalogue: &Catalogue) -> Money {
        let Some(price) = catalogue.price_of(&self.product_code) else {
            return Money::zero();
        };

        let pairs = count_of(items, &self.product_code) / 2;
        price.halve().multiply_quantity(pairs)
    }

    fn describe(&self) -> String {
        format!("buy one {} get second half price", self.product_code)
    }

    fn product_codes(&self) -> Vec<&str> {
        vec![self.product_code.as_str()]
    }
}

// =============================================================================
// Percentage Off
// =============================================================================

/// A fixed percentage off every unit of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageOff {
    product_code: String,
    discount_bps: u32,
}

impl PercentageOff {
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%), at most 10000
    pub fn new(
        product_code: impl Into<String>,
        discount_bps: u32,
    ) -> Result<Self, ConfigurationError> {
        let product_code = product_code.into();

        if discount_bps > MAX_DISCOUNT_BPS {
            return Err(ConfigurationError::InvalidPercentage {
                code: product_code,
                discount_bps,
            });
        }

        Ok(PercentageOff {
            product_code,
            discount_bps,
        })
    }
}

impl Offer for PercentageOff {
    fn discount(&self, items: &[String], catalogue: &Catalogue) -> Money {
        let Some(price) = catalogue.price_of(&self.product_code) else {
            return Money::zero();
        };

        price
            .fraction_bps(self.discount_bps)
            .multiply_quantity(count_of(items, &self.product_code))
    }

    fn describe(&self) -> String {
        format!("{} bps off {}", self.discount_bps, self.product_code)
    }

    fn product_codes(&self) -> Vec<&str> {
        vec![self.product_code.as_str()]
    }
}

// =============================================================================
// Multi-Buy
// =============================================================================

/// "N for the price of M": each complete group of `buy` units costs
/// `pay_for` units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiBuy {
    product_code: String,
    buy: u32,
    pay_for: u32,
}

impl MultiBuy {
    pub fn new(
        product_code: impl Into<String>,
        buy: u32,
        pay_for: u32,
    ) -> Result<Self, ConfigurationError> {
        let product_code = product_code.into();

        if buy == 0 || pay_for >= buy {
            return Err(ConfigurationError::InvalidMultiBuy {
                code: product_code,
                buy,
                pay_for,
            });
        }

        Ok(MultiBuy {
            product_code,
            buy,
            pay_for,
        })
    }
}

impl Offer for MultiBuy {
    fn discount(&self, items: &[String], catalogue: &Catalogue) -> Money {
        let Some(price) = catalogue.price_of(&self.product_code) else {
            return Money::zero();
        };

        let groups = count_of(items, &self.product_code) / u64::from(self.buy);
        let free_per_group = u64::from(self.buy - self.pay_for);
        price.multiply_quantity(groups * free_per_group)
    }

    fn describe(&self) -> String {
        format!("{} {} for the price of {}", self.buy, self.product_code, self.pay_for)
    }

    fn product_codes(&self) -> Vec<&str> {
        vec![self.product_code.as_str()]
    }
}

// =============================================================================
// Offer Definitions
// =============================================================================

/// Serializable description of a built-in offer, as written in a rules file.
///
/// ```toml
/// [[offers]]
/// kind = "buy_one_get_second_half_price"
/// product = "R01"
///
/// [[offers]]
/// kind = "multi_buy"
/// product = "B01"
/// buy = 3
/// pay_for = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OfferDefinition {
    BuyOneGetSecondHalfPrice { product: String },
    PercentageOff { product: String, discount_bps: u32 },
    MultiBuy { product: String, buy: u32, pay_for: u32 },
}

impl OfferDefinition {
    /// Builds the shared offer this definition describes.
    pub fn build(&self) -> Result<Arc<dyn Offer>, ConfigurationError> {
        let offer: Arc<dyn Offer> = match self {
            OfferDefinition::BuyOneGetSecondHalfPrice { product } => {
                Arc::new(BuyOneGetSecondHalfPrice::new(product.clone()))
            }
            OfferDefinition::PercentageOff {
                product,
                discount_bps,
            } => Arc::new(PercentageOff::new(product.clone(), *discount_bps)?),
            OfferDefinition::MultiBuy {
                product,
                buy,
                pay_for,
            } => Arc::new(MultiBuy::new(product.clone(), *buy, *pay_for)?),
        };

        Ok(offer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
