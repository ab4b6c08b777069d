//! # Pricing Algorithm
//!
//! The subtotal → discount → delivery → rounded total pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [B01, B01, R01, R01, R01]                                       │
//! │                                                                         │
//! │  1. subtotal          7.95 + 7.95 + 32.95 × 3          =  98.75        │
//! │  2. discount          Σ offers  (one R01 pair → 16.475) =  16.475       │
//! │  3. discounted total  98.75 − 16.475                    =  82.275       │
//! │  4. delivery          tier ≥ 50                         =   2.95        │
//! │  5. total             round(82.275 + 2.95)              =  85.23        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::PricingRules;
use crate::types::PriceBreakdown;

/// Prices an item sequence against a rule set.
///
/// Pure and deterministic: the same items and rules always give the same
/// breakdown. Discounted totals are not clamped at zero.
///
/// ## Errors
/// - `CoreError::UnknownProduct` for the first code not in the catalogue
/// - `CoreError::AmountOverflow` if an offer's discount pushes an amount out
///   of range (validated prices and charges never do)
pub fn price_items(items: &[String], rules: &PricingRules) -> CoreResult<PriceBreakdown> {
    let catalogue = rules.catalogue();

    let subtotal = items.iter().try_fold(Money::zero(), |sum, code| {
        let price = catalogue
            .price_of(code)
            .ok_or_else(|| CoreError::UnknownProduct(code.clone()))?;
        sum.checked_add(price).ok_or(overflow("subtotal"))
    })?;

    let discount = rules.offers().iter().try_fold(Money::zero(), |sum, offer| {
        sum.checked_add(offer.discount(items, catalogue))
            .ok_or(overflow("discount"))
    })?;

    let discounted_total = subtotal
        .checked_sub(discount)
        .ok_or(overflow("discounted total"))?;
    let delivery_charge = rules.delivery().charge_for(discounted_total);
    let total = discounted_total
        .checked_add(delivery_charge)
        .ok_or(overflow("total"))?;

    Ok(PriceBreakdown {
        item_count: u32::try_from(items.len()).unwrap_or(u32::MAX),
        subtotal,
        discount,
        discounted_total,
        delivery_charge,
        total: total.round_to_cents(),
    })
}

fn overflow(stage: &'static str) -> CoreError {
    CoreError::AmountOverflow { stage }
}
