//! # Domain Types
//!
//! Plain value types shared by the catalogue, the delivery table and the
//! basket.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DeliveryRule   │   │ PriceBreakdown  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (key)     │   │  min_total      │   │  subtotal       │       │
//! │  │  name           │   │  charge         │   │  discount       │       │
//! │  │  price          │   │                 │   │  delivery       │       │
//! │  └─────────────────┘   └─────────────────┘   │  total          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Product code - the catalogue key (e.g. "R01").
    pub code: String,

    /// Display name. Not used for pricing.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Delivery Rule
// =============================================================================

/// One delivery tier: baskets whose discounted total is at least
/// `min_total` pay `charge` for delivery.
///
/// Rules files keep `min_total`; the TypeScript binding is camelCase like
/// every other exported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, rename_all = "camelCase")]
pub struct DeliveryRule {
    /// Inclusive lower bound of the discounted total.
    pub min_total: Money,

    /// Amount added to the total.
    pub charge: Money,
}

impl DeliveryRule {
    #[inline]
    pub const fn new(min_total: Money, charge: Money) -> Self {
        DeliveryRule { min_total, charge }
    }

    /// Whether a basket with this discounted total qualifies for the tier.
    #[inline]
    pub fn applies_to(&self, discounted_total: Money) -> bool {
        discounted_total >= self.min_total
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every step of one pricing run.
///
/// Only `total` is rounded; the other amounts are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    /// Number of items priced, duplicates included.
    pub item_count: u32,

    /// Sum of unit prices.
    pub subtotal: Money,

    /// Sum of all offer discounts.
    pub discount: Money,

    /// `subtotal - discount`. May be negative if offers are misconfigured.
    pub discounted_total: Money,

    /// Charge of the matching delivery tier.
    pub delivery_charge: Money,

    /// `discounted_total + delivery_charge`, rounded to cents.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_rule_lower_bound_is_inclusive() {
        let rule = DeliveryRule::new(Money::from_cents(5000), Money::from_cents(295));
        assert!(rule.applies_to(Money::from_cents(5000)));
        assert!(rule.applies_to(Money::from_cents(5001)));
        assert!(!rule.applies_to(Money::from_cents(4999)));
    }

    #[test]
    fn test_product_deserializes_from_decimal_strings() {
        let product: Product =
            serde_json::from_str(r#"{"code":"R01","name":"Red Widget","price":"32.95"}"#).unwrap();
        assert_eq!(product, Product::new("R01", "Red Widget", Money::from_cents(3295)));
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = PriceBreakdown {
            item_count: 2,
            subtotal: Money::from_cents(3290),
            discount: Money::zero(),
            discounted_total: Money::from_cents(3290),
            delivery_charge: Money::from_cents(495),
            total: Money::from_cents(3785),
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["deliveryCharge"], "4.95");
        assert_eq!(json["total"], "37.85");
        assert_eq!(json["itemCount"], 2);
    }

    #[test]
    fn test_bindings_use_camel_case() {
        let rule = DeliveryRule::decl();
        assert!(rule.contains("minTotal"));
        assert!(!rule.contains("min_total"));

        assert!(PriceBreakdown::decl().contains("deliveryCharge"));
    }

    #[test]
    fn test_delivery_rule_file_format_stays_snake_case() {
        let rule: DeliveryRule =
            serde_json::from_str(r#"{"min_total":"50","charge":"2.95"}"#).unwrap();
        assert_eq!(rule, DeliveryRule::new(Money::from_cents(5000), Money::from_cents(295)));
    }
}
