//! # Catalogue
//!
//! The fixed product code → product mapping.
//!
//! Products keep the order they were configured in, so the presentation layer
//! can list them the same way every time. Lookups go through a code index.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;

/// Read-only product catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// Builds a catalogue, validating every product.
    ///
    /// ## Errors
    /// - `ConfigurationError::InvalidProduct` for a bad code, name or price
    /// - `ConfigurationError::DuplicateProduct` when a code appears twice
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Catalogue, Money, Product};
    ///
    /// let catalogue = Catalogue::new(vec![
    ///     Product::new("R01", "Red Widget", Money::from_cents(3295)),
    ///     Product::new("B01", "Blue Widget", Money::from_cents(795)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(catalogue.price_of("B01"), Some(Money::from_cents(795)));
    /// assert!(catalogue.lookup("X01").is_none());
    /// ```
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, ConfigurationError> {
        let mut catalogue = Catalogue::default();

        for product in products {
            validate_product(&product)?;

            if catalogue.index.contains_key(&product.code) {
                return Err(ConfigurationError::DuplicateProduct(product.code));
            }

            catalogue
                .index
                .insert(product.code.clone(), catalogue.products.len());
            catalogue.products.push(product);
        }

        Ok(catalogue)
    }

    /// Finds a product by code.
    #[inline]
    pub fn lookup(&self, code: &str) -> Option<&Product> {
        self.index.get(code).map(|&i| &self.products[i])
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Unit price for a code, if the product exists.
    #[inline]
    pub fn price_of(&self, code: &str) -> Option<Money> {
        self.lookup(code).map(|p| p.price)
    }

    /// Products in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
