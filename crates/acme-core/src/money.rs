//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE INTEGER CENTS PROBLEM                                              │
//! │    Half of a 32.95 widget is 16.475, which is not a whole cent.        │
//! │    Rounding every discount to cents drifts the basket total.           │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals, Rounded Once                             │
//! │    Every intermediate amount keeps full precision.                     │
//! │    Only the final basket total is rounded to cents.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::Money;
//!
//! let price = Money::from_cents(3295); // $32.95
//!
//! let doubled = price * 2;              // $65.90
//! let half = price.halve();             // $16.475 (exact)
//! assert_eq!(half.round_to_cents(), Money::from_cents(1648));
//! assert_eq!(doubled, Money::from_cents(6590));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Basis points in one whole (10000 bps = 100%).
const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount in the store currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for misconfigured discounts
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Serialized as a string**: `"32.95"` survives JSON and TOML unchanged
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► subtotal ──► − discount ──► + delivery ──► total    │
/// │                                     ▲                          │        │
/// │                          Offer::discount()            round_to_cents() │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(795); // $7.95
    /// assert_eq!(price.to_string(), "$7.95");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  HALF AWAY FROM ZERO (the rule shoppers expect on a receipt)       │
    /// │                                                                     │
    /// │    54.375 → 54.38      85.225 → 85.23      -1.005 → -1.01          │
    /// │                                                                     │
    /// │  Bankers rounding would give 85.22 for the second case.            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let amount = Money::from_cents(8522) + Money::from_cents(1).halve();
    /// assert_eq!(amount.round_to_cents(), Money::from_cents(8523));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(795);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(2385));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns exactly half of the amount, without rounding.
    #[inline]
    pub fn halve(&self) -> Self {
        Money(self.0 / Decimal::from(2))
    }

    /// Adds two amounts, returning `None` if the result does not fit.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts two amounts, returning `None` if the result does not fit.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Returns the given fraction of the amount, in basis points (1000 = 10%).
    ///
    /// The result is exact; no cent rounding is applied.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{money::Money, Decimal};
    ///
    /// let price = Money::from_cents(2495);
    /// assert_eq!(price.fraction_bps(1000).amount(), Decimal::new(2495, 3));
    /// assert_eq!(price.fraction_bps(1000).to_string(), "$2.50");
    /// ```
    pub fn fraction_bps(&self, bps: u32) -> Money {
        Money(self.0 * Decimal::from(bps) / Decimal::from(BPS_PER_WHOLE))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount rounded to cents, e.g. `$16.48` or `-$5.50`.
///
/// ## Note
/// This is for receipts and logs. The exact value is available via `amount()`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents();
        let sign = if rounded.is_negative() { "-" } else { "" };
        let mut magnitude = rounded.0.abs();
        magnitude.rescale(2);
        write!(f, "{}${}", sign, magnitude)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by item count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
