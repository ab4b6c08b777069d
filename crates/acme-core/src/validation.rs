//! # Validation Module
//!
//! Configuration checks run once, when pricing rules are built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rules file (acme-checkout)                                   │
//! │  └── TOML / serde shape checks                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (PricingRules::new)                              │
//! │  ├── Product fields (code, name, price)                                 │
//! │  ├── Delivery table (base tier, duplicates, charges)                   │
//! │  └── Offer references (every code exists)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Basket::add                                                   │
//! │  └── Unknown product codes, per call                                   │
//! │                                                                         │
//! │  Fail fast at startup; the pricing pipeline never re-checks.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::error::{ConfigurationError, ValidationError};
use crate::money::Money;
use crate::offer::Offer;
use crate::types::{DeliveryRule, Product};

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_CODE_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;

/// Largest accepted price, charge or tier threshold: $1,000,000.00.
///
/// Keeps basket arithmetic far inside the range of `Decimal`.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_product_code;
///
/// assert!(validate_product_code("R01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price or charge.
///
/// ## Rules
/// - Must not be negative; zero is allowed (free items)
/// - At most `MAX_AMOUNT_CENTS`
pub fn validate_price(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value: amount,
        });
    }

    validate_max_amount(field, amount)
}

fn validate_max_amount(field: &str, amount: Money) -> ValidationResult<()> {
    let max = Money::from_cents(MAX_AMOUNT_CENTS);
    if amount > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
            value: amount,
        });
    }

    Ok(())
}

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_code(&product.code)?;
    validate_product_name(&product.name)?;
    validate_price("price", product.price)
}

// =============================================================================
// Rule Set Validators
// =============================================================================

/// Validates a delivery table.
///
/// ## Rules
/// - At least one tier
/// - The lowest tier starts at or below zero, so every basket matches a tier
/// - No two tiers share a `min_total`
/// - No negative charges
/// - Thresholds and charges at most `MAX_AMOUNT_CENTS`
///
/// ## Example
/// ```rust
/// use acme_core::{validation::validate_delivery_rules, DeliveryRule, Money};
///
/// let tiers = [
///     DeliveryRule::new(Money::from_cents(5000), Money::from_cents(295)),
///     DeliveryRule::new(Money::zero(), Money::from_cents(495)),
/// ];
/// assert!(validate_delivery_rules(&tiers).is_ok());
/// assert!(validate_delivery_rules(&tiers[..1]).is_err());
/// ```
pub fn validate_delivery_rules(rules: &[DeliveryRule]) -> Result<(), ConfigurationError> {
    let lowest = rules
        .iter()
        .map(|r| r.min_total)
        .min()
        .ok_or(ConfigurationError::EmptyDeliveryRules)?;

    if lowest.is_positive() {
        return Err(ConfigurationError::MissingBaseTier { lowest });
    }

    let mut seen = HashSet::with_capacity(rules.len());
    for rule in rules {
        if !seen.insert(rule.min_total) {
            return Err(ConfigurationError::DuplicateTier {
                min_total: rule.min_total,
            });
        }

        if rule.charge.is_negative() {
            return Err(ConfigurationError::NegativeCharge {
                min_total: rule.min_total,
                charge: rule.charge,
            });
        }

        validate_max_amount("min_total", rule.min_total)
            .and_then(|()| validate_price("charge", rule.charge))
            .map_err(|source| ConfigurationError::InvalidTier {
                min_total: rule.min_total,
                source,
            })?;
    }

    Ok(())
}

/// Validates that every product an offer targets is in the catalogue.
pub fn validate_offer_references(
    offers: &[Arc<dyn Offer>],
    catalogue: &Catalogue,
) -> Result<(), ConfigurationError> {
    for offer in offers {
        if let Some(code) = offer
            .product_codes()
            .into_iter()
            .find(|code| !catalogue.contains(code))
        {
            return Err(ConfigurationError::UnknownOfferProduct {
                offer: offer.describe(),
                code: code.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::BuyOneGetSecondHalfPrice;

    fn tier(min_cents: i64, charge_cents: i64) -> DeliveryRule {
        DeliveryRule::new(Money::from_cents(min_cents), Money::from_cents(charge_cents))
    }

    #[test]
    fn test_validate_product_code() {
        assert!(validate_product_code("R01").is_ok());
        assert!(validate_product_code("widget_red-1").is_ok());

        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code("has space").is_err());
        assert!(validate_product_code(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Red Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_cents(3295)).is_ok());
        assert!(matches!(
            validate_price("price", Money::from_cents(-1)),
            Err(ValidationError::Negative { .. })
        ));

        let max = Money::from_cents(MAX_AMOUNT_CENTS);
        assert!(validate_price("price", max).is_ok());
        assert!(matches!(
            validate_price("price", max + Money::from_cents(1)),
            Err(ValidationError::TooLarge { field, .. }) if field == "price"
        ));
        assert!(matches!(
            validate_price("price", Money::from_decimal(rust_decimal::Decimal::MAX)),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_delivery_rules_valid() {
        let rules = [tier(9000, 0), tier(5000, 295), tier(0, 495)];
        assert!(validate_delivery_rules(&rules).is_ok());
    }

    #[test]
    fn test_delivery_rules_empty() {
        assert!(matches!(
            validate_delivery_rules(&[]),
            Err(ConfigurationError::EmptyDeliveryRules)
        ));
    }

    #[test]
    fn test_delivery_rules_missing_base_tier() {
        let rules = [tier(9000, 0), tier(5000, 295)];
        assert!(matches!(
            validate_delivery_rules(&rules),
            Err(ConfigurationError::MissingBaseTier { lowest }) if lowest == Money::from_cents(5000)
        ));
    }

    #[test]
    fn test_delivery_rules_duplicate_tier() {
        let rules = [tier(5000, 295), tier(0, 495), tier(5000, 195)];
        assert!(matches!(
            validate_delivery_rules(&rules),
            Err(ConfigurationError::DuplicateTier { min_total }) if min_total == Money::from_cents(5000)
        ));
    }

    #[test]
    fn test_delivery_rules_negative_charge() {
        let rules = [tier(0, -100)];
        assert!(matches!(
            validate_delivery_rules(&rules),
            Err(ConfigurationError::NegativeCharge { .. })
        ));
    }

    #[test]
    fn test_delivery_rules_amounts_are_bounded() {
        let too_much = MAX_AMOUNT_CENTS + 1;

        assert!(matches!(
            validate_delivery_rules(&[tier(0, too_much)]),
            Err(ConfigurationError::InvalidTier {
                source: ValidationError::TooLarge { .. },
                ..
            })
        ));
        assert!(matches!(
            validate_delivery_rules(&[tier(0, 495), tier(too_much, 0)]),
            Err(ConfigurationError::InvalidTier { min_total, .. })
                if min_total == Money::from_cents(too_much)
        ));
    }

    #[test]
    fn test_offer_references() {
        let catalogue =
            Catalogue::new(vec![Product::new("R01", "Red Widget", Money::from_cents(3295))])
                .unwrap();

        let good: Vec<Arc<dyn Offer>> = vec![Arc::new(BuyOneGetSecondHalfPrice::new("R01"))];
        assert!(validate_offer_references(&good, &catalogue).is_ok());

        let bad: Vec<Arc<dyn Offer>> = vec![Arc::new(BuyOneGetSecondHalfPrice::new("G01"))];
        assert!(matches!(
            validate_offer_references(&bad, &catalogue),
            Err(ConfigurationError::UnknownOfferProduct { code, .. }) if code == "G01"
        ));
    }
}
