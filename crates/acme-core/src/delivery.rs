//! # Delivery Charges
//!
//! Tiered delivery pricing keyed on the discounted basket total.
//!
//! ## Tier Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tiers: ≥ 90 → 0.00   ≥ 50 → 2.95   ≥ 0 → 4.95                          │
//! │                                                                         │
//! │  discounted total 49.425 ──► highest min_total ≤ 49.425 is 0  ──► 4.95 │
//! │  discounted total 50.00  ──► highest min_total ≤ 50.00  is 50 ──► 2.95 │
//! │  discounted total 82.275 ──► highest min_total ≤ 82.275 is 50 ──► 2.95 │
//! │                                                                         │
//! │  Single linear scan. On equal min_total the earlier rule wins.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::DeliveryRule;

/// The delivery tier table, in configuration order.
///
/// Construction does not validate; `PricingRules::new` runs
/// [`validate_delivery_rules`](crate::validation::validate_delivery_rules)
/// before any basket sees the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryRules {
    rules: Vec<DeliveryRule>,
}

impl DeliveryRules {
    pub fn new(rules: impl IntoIterator<Item = DeliveryRule>) -> Self {
        DeliveryRules {
            rules: rules.into_iter().collect(),
        }
    }

    /// Picks the tier with the highest `min_total` at or below
    /// `discounted_total`.
    ///
    /// Returns `None` when no tier qualifies, which a validated table only
    /// allows for negative totals.
    pub fn tier_for(&self, discounted_total: Money) -> Option<&DeliveryRule> {
        let mut best: Option<&DeliveryRule> = None;

        for rule in &self.rules {
            if !rule.applies_to(discounted_total) {
                continue;
            }
            // strict: an equal min_total never displaces an earlier rule
            if best.map_or(true, |current| rule.min_total > current.min_total) {
                best = Some(rule);
            }
        }

        best
    }

    /// Delivery charge for a discounted total. Zero when no tier qualifies.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{DeliveryRule, DeliveryRules, Money};
    ///
    /// let table = DeliveryRules::new([
    ///     DeliveryRule::new(Money::from_cents(9000), Money::zero()),
    ///     DeliveryRule::new(Money::from_cents(5000), Money::from_cents(295)),
    ///     DeliveryRule::new(Money::zero(), Money::from_cents(495)),
    /// ]);
    ///
    /// assert_eq!(table.charge_for(Money::from_cents(4999)), Money::from_cents(495));
    /// assert_eq!(table.charge_for(Money::from_cents(5000)), Money::from_cents(295));
    /// assert_eq!(table.charge_for(Money::from_cents(9000)), Money::zero());
    /// ```
    pub fn charge_for(&self, discounted_total: Money) -> Money {
        self.tier_for(discounted_total)
            .map(|rule| rule.charge)
            .unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[DeliveryRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeliveryRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<DeliveryRule> for DeliveryRules {
    fn from_iter<I: IntoIterator<Item = DeliveryRule>>(iter: I) -> Self {
        DeliveryRules::new(iter)
    }
}
