//! # Checkout Commands
//!
//! One function per subcommand. Each returns the text to print, so the
//! command layer stays testable without capturing stdout.

use std::sync::Arc;

use acme_core::{Basket, PricingRules};
use tracing::{debug, info};

use crate::config::{CheckoutConfig, RulesSource};
use crate::error::AppResult;

/// Lists every product with its unit price, in catalogue order.
pub fn catalogue(rules: &PricingRules, config: &CheckoutConfig) -> String {
    let lines = rules.catalogue().iter().map(|product| {
        format!(
            "{:<6} {:<20} {:>10}",
            product.code,
            product.name,
            config.format_money(product.price)
        )
    });
    render(lines)
}

/// Prices a basket built from `codes`, added in order.
///
/// ## Errors
/// - `CoreError::UnknownProduct` for the first code missing from the catalogue
/// - `CoreError::AmountOverflow` if a custom offer produces an out-of-range amount
pub fn total(
    rules: Arc<PricingRules>,
    codes: &[String],
    config: &CheckoutConfig,
    json: bool,
) -> AppResult<String> {
    let mut basket = Basket::new(rules);

    for code in codes {
        debug!(code = %code, "Adding item");
        basket.add(code)?;
    }

    let breakdown = basket.try_breakdown()?;
    info!(
        items = breakdown.item_count,
        total = %breakdown.total,
        "Basket priced"
    );

    if json {
        return Ok(serde_json::to_string_pretty(&breakdown)?);
    }

    Ok(render([
        format!("Items:    {}", breakdown.item_count),
        format!("Subtotal: {}", config.format_money(breakdown.subtotal)),
        format!("Discount: {}", config.format_money(breakdown.discount)),
        format!("Delivery: {}", config.format_money(breakdown.delivery_charge)),
        format!("Total:    {}", config.format_money(breakdown.total)),
    ]))
}

/// Summarises a loaded rule set; reaching this point means it validated.
pub fn check(rules: &PricingRules, source: &RulesSource, config: &CheckoutConfig) -> String {
    let mut lines = vec![
        format!("Rules OK: {source}"),
        format!("Products: {}", rules.catalogue().len()),
        "Delivery tiers:".to_string(),
    ];

    lines.extend(rules.delivery().iter().map(|tier| {
        format!(
            "  from {:>10}  charge {}",
            config.format_money(tier.min_total),
            config.format_money(tier.charge)
        )
    }));

    lines.push("Offers:".to_string());
    if rules.offers().is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(rules.offers().iter().map(|offer| format!("  {}", offer.describe())));

    render(lines)
}

/// One line per entry, each newline-terminated.
fn render(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use acme_core::{CoreError, RulesDefinition};
    use rstest::rstest;

    fn acme() -> Arc<PricingRules> {
        Arc::new(PricingRules::from_definition(RulesDefinition::acme_widget_co()).unwrap())
    }

    fn owned(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_catalogue_lists_products_in_order() {
        let out = catalogue(&acme(), &CheckoutConfig::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("R01"));
        assert!(lines[0].contains("Red Widget"));
        assert!(lines[0].ends_with("$32.95"));
        assert!(lines[2].starts_with("B01"));
    }

    #[rstest]
    #[case(&["B01", "G01"], "$37.85")]
    #[case(&["R01", "R01"], "$54.38")]
    #[case(&["R01", "G01"], "$60.85")]
    #[case(&["B01", "B01", "R01", "R01", "R01"], "$85.23")]
    #[case(&[], "$4.95")]
    fn test_total_text(#[case] codes: &[&str], #[case] expected: &str) {
        let out = total(acme(), &owned(codes), &CheckoutConfig::default(), false).unwrap();
        let last = out.lines().last().unwrap();
        assert_eq!(last, format!("Total:    {expected}"));
    }

    #[test]
    fn test_total_json() {
        let out = total(acme(), &owned(&["R01", "R01"]), &CheckoutConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["itemCount"], 2);
        assert_eq!(value["total"], "54.38");
        assert_eq!(value["subtotal"], "65.90");
    }

    #[test]
    fn test_total_unknown_code() {
        let err = total(acme(), &owned(&["B01", "Z99"]), &CheckoutConfig::default(), false)
            .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::UnknownProduct(code)) if code == "Z99"));
    }

    #[test]
    fn test_total_uses_currency_symbol() {
        let config = CheckoutConfig {
            currency_symbol: "€".to_string(),
            ..Default::default()
        };
        let out = total(acme(), &owned(&["B01"]), &config, false).unwrap();
        assert!(out.contains("Total:    €12.90"));
    }

    #[test]
    fn test_text_output_is_line_terminated() {
        let out = total(acme(), &owned(&["G01"]), &CheckoutConfig::default(), false).unwrap();

        assert!(out.ends_with("$29.90\n"));
        assert_eq!(out.lines().count(), 5);
        assert!(out.starts_with("Items:    1\n"));
    }

    #[test]
    fn test_check_summary() {
        let out = check(&acme(), &RulesSource::BuiltIn, &CheckoutConfig::default());

        assert!(out.starts_with("Rules OK: built-in Acme Widget Co rules"));
        assert!(out.contains("Products: 3"));
        assert!(out.contains("charge $4.95"));
        assert!(out.contains("buy one R01 get second half price"));
    }
}
