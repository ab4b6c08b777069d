//! # Basket
//!
//! The mutable record of one checkout session.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Caller Action            Basket Method           State Change          │
//! │  ─────────────            ─────────────           ────────────          │
//! │                                                                         │
//! │  Pick product ───────────► add(code) ───────────► items.push(code)     │
//! │                            (unknown code → Err, items untouched)        │
//! │                                                                         │
//! │  Show total ─────────────► total() ─────────────► (read only)          │
//! │                                                                         │
//! │  Show receipt ───────────► breakdown() ─────────► (read only)          │
//! │                                                                         │
//! │  What-if pricing ────────► total_for(items) ────► (read only)          │
//! │                                                                         │
//! │  NOTE: A basket belongs to one session. Share the Arc<PricingRules>,   │
//! │        not the basket.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::price_items;
use crate::rules::PricingRules;
use crate::types::PriceBreakdown;

/// A checkout basket.
///
/// ## Invariants
/// - Every code in `items` exists in the catalogue (checked by `add`)
/// - Items keep insertion order; duplicates are separate entries
/// - The rules are never mutated through the basket
#[derive(Debug, Clone)]
pub struct Basket {
    rules: Arc<PricingRules>,
    items: Vec<String>,
}

impl Basket {
    /// Creates an empty basket priced against shared rules.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use acme_core::{Basket, Money, PricingRules, RulesDefinition};
    ///
    /// let rules = Arc::new(PricingRules::from_definition(RulesDefinition::acme_widget_co()).unwrap());
    /// let mut basket = Basket::new(rules);
    ///
    /// basket.add("B01").unwrap();
    /// basket.add("G01").unwrap();
    /// assert_eq!(basket.total(), Money::from_cents(3785));
    ///
    /// assert!(basket.add("X01").is_err());
    /// assert_eq!(basket.len(), 2);
    /// ```
    pub fn new(rules: Arc<PricingRules>) -> Self {
        Basket {
            rules,
            items: Vec::new(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` when the code is not in the catalogue.
    /// The basket is left unchanged.
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        if !self.rules.catalogue().contains(code) {
            return Err(CoreError::UnknownProduct(code.to_string()));
        }

        self.items.push(code.to_string());
        Ok(())
    }

    /// Total payable, rounded to cents.
    ///
    /// Side-effect free; repeated calls return the same amount until the
    /// next `add`.
    pub fn total(&self) -> Money {
        self.breakdown().total
    }

    /// Every pricing step for the current items.
    ///
    /// ## Panics
    /// Only if a custom offer returns a discount outside the range of
    /// `Decimal`. Use [`Basket::try_breakdown`] when offers are untrusted.
    pub fn breakdown(&self) -> PriceBreakdown {
        self.try_breakdown()
            .expect("items are catalogue codes and validated amounts cannot overflow")
    }

    /// Like [`Basket::breakdown`], but reports overflow as an error.
    pub fn try_breakdown(&self) -> CoreResult<PriceBreakdown> {
        price_items(&self.items, &self.rules)
    }

    /// Total for an arbitrary item sequence, ignoring the basket's own items.
    ///
    /// Identical to a fresh basket with the same items added in order.
    pub fn total_for(&self, items: &[String]) -> CoreResult<Money> {
        Ok(self.breakdown_for(items)?.total)
    }

    /// Breakdown for an arbitrary item sequence.
    pub fn breakdown_for(&self, items: &[String]) -> CoreResult<PriceBreakdown> {
        price_items(items, &self.rules)
    }

    /// Item codes in the order they were added.
    #[inline]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[inline]
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RulesDefinition;
    use crate::types::Product;
    use proptest::prelude::*;
    use rstest::rstest;

    fn acme() -> Arc<PricingRules> {
        Arc::new(PricingRules::from_definition(RulesDefinition::acme_widget_co()).unwrap())
    }

    fn basket_with(codes: &[&str]) -> Basket {
        let mut basket = Basket::new(acme());
        for code in codes {
            basket.add(code).unwrap();
        }
        basket
    }

    fn owned(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[rstest]
    #[case(&["B01", "G01"], 3785)]
    #[case(&["R01", "R01"], 5438)]
    #[case(&["R01", "G01"], 6085)]
    #[case(&["B01", "B01", "R01", "R01", "R01"], 8523)]
    #[case(&[], 495)]
    fn test_acme_scenarios(#[case] codes: &[&str], #[case] expected_cents: i64) {
        let basket = basket_with(codes);
        assert_eq!(basket.total(), Money::from_cents(expected_cents));
        assert_eq!(
            basket.total_for(&owned(codes)).unwrap(),
            Money::from_cents(expected_cents)
        );
    }

    #[test]
    fn test_red_pair_breakdown() {
        let breakdown = basket_with(&["R01", "R01"]).breakdown();

        assert_eq!(breakdown.subtotal, Money::from_cents(6590));
        assert_eq!(breakdown.discount, Money::from_cents(3295).halve());
        // 49.425 is under the 50 tier
        assert_eq!(breakdown.delivery_charge, Money::from_cents(495));
        assert_eq!(breakdown.total, Money::from_cents(5438));
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 82.275 + 2.95 = 85.225 exactly; bankers rounding would give 85.22
        let basket = basket_with(&["B01", "B01", "R01", "R01", "R01"]);
        assert_eq!(
            basket.breakdown().discounted_total + basket.breakdown().delivery_charge,
            Money::from_cents(8522) + Money::from_cents(1).halve()
        );
        assert_eq!(basket.total(), Money::from_cents(8523));
    }

    #[test]
    fn test_total_exactly_on_tier_uses_that_tier() {
        let definition = RulesDefinition {
            products: vec![Product::new("F01", "Fifty Widget", Money::from_cents(5000))],
            offers: Vec::new(),
            ..RulesDefinition::acme_widget_co()
        };
        let rules = Arc::new(PricingRules::from_definition(definition).unwrap());

        let mut basket = Basket::new(rules);
        basket.add("F01").unwrap();
        assert_eq!(basket.breakdown().delivery_charge, Money::from_cents(295));
        assert_eq!(basket.total(), Money::from_cents(5295));
    }

    #[test]
    fn test_add_unknown_code_leaves_items_untouched() {
        let mut basket = basket_with(&["R01"]);

        let err = basket.add("R02").unwrap_err();
        assert!(matches!(err, CoreError::UnknownProduct(code) if code == "R02"));
        assert_eq!(basket.items(), ["R01"]);
    }

    #[test]
    fn test_items_keep_order_and_duplicates() {
        let basket = basket_with(&["G01", "R01", "G01"]);
        assert_eq!(basket.items(), ["G01", "R01", "G01"]);
        assert_eq!(basket.len(), 3);
        assert!(!basket.is_empty());
    }

    #[test]
    fn test_total_for_ignores_own_items() {
        let basket = basket_with(&["R01", "R01", "R01"]);
        let before = basket.total();

        assert_eq!(basket.total_for(&owned(&["B01"])).unwrap(), Money::from_cents(1290));
        assert_eq!(basket.total(), before);
        assert_eq!(basket.len(), 3);
    }

    #[test]
    fn test_total_for_rejects_unknown_code() {
        let basket = Basket::new(acme());
        assert!(matches!(
            basket.total_for(&owned(&["B01", "nope"])),
            Err(CoreError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_oversized_price_is_rejected_before_any_basket() {
        let definition = RulesDefinition {
            products: vec![Product::new("BIG", "Big Widget", Money::from_decimal(crate::Decimal::MAX))],
            offers: Vec::new(),
            ..RulesDefinition::acme_widget_co()
        };

        assert!(matches!(
            PricingRules::from_definition(definition),
            Err(crate::error::ConfigurationError::InvalidProduct(
                crate::error::ValidationError::TooLarge { .. }
            ))
        ));
    }

    #[test]
    fn test_try_breakdown_matches_breakdown() {
        let basket = basket_with(&["R01", "R01", "B01"]);
        assert_eq!(basket.try_breakdown().unwrap(), basket.breakdown());
    }

    #[test]
    fn test_baskets_share_rules() {
        let rules = acme();
        let mut first = Basket::new(Arc::clone(&rules));
        let mut second = Basket::new(Arc::clone(&rules));

        first.add("R01").unwrap();
        second.add("B01").unwrap();

        assert_eq!(first.total(), Money::from_cents(3790));
        assert_eq!(second.total(), Money::from_cents(1290));
        assert_eq!(Arc::strong_count(&rules), 3);
    }

    fn product_code() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("R01"), Just("G01"), Just("B01")]
    }

    proptest! {
        #[test]
        fn prop_total_is_idempotent(codes in prop::collection::vec(product_code(), 0..20)) {
            let basket = basket_with(&codes);
            prop_assert_eq!(basket.total(), basket.total());
            prop_assert_eq!(basket.breakdown(), basket.breakdown());
        }

        #[test]
        fn prop_permutations_share_a_total(
            (codes, shuffled) in prop::collection::vec(product_code(), 0..20)
                .prop_flat_map(|codes| (Just(codes.clone()), Just(codes).prop_shuffle())),
        ) {
            prop_assert_eq!(basket_with(&codes).total(), basket_with(&shuffled).total());
        }

        #[test]
        fn prop_total_for_matches_basket(codes in prop::collection::vec(product_code(), 0..20)) {
            let empty = Basket::new(acme());
            prop_assert_eq!(empty.total_for(&owned(&codes)).unwrap(), basket_with(&codes).total());
        }

        #[test]
        fn prop_unknown_codes_never_mutate(
            codes in prop::collection::vec(product_code(), 0..10),
            unknown in "[a-z]{1,5}",
        ) {
            let expected = owned(&codes);
            let mut basket = basket_with(&codes);
            prop_assert!(basket.add(&unknown).is_err());
            prop_assert_eq!(basket.items(), expected.as_slice());
        }

        #[test]
        fn prop_total_is_rounded_to_cents(codes in prop::collection::vec(product_code(), 0..20)) {
            let total = basket_with(&codes).total();
            prop_assert_eq!(total, total.round_to_cents());
        }
    }
}
