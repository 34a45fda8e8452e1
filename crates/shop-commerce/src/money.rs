//! Money type for representing prices and cart totals.
//!
//! Amounts are whole numbers of the currency's smallest unit (cents for USD),
//! so a running cart total updated by signed deltas never drifts from the sum
//! of its line items the way floating-point totals do.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    MXN,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::MXN => "MX$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "MXN" => Ok(Currency::MXN),
            "JPY" => Ok(Currency::JPY),
            _ => Err(CommerceError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units (e.g., dollars).
    ///
    /// ```
    /// use shop_commerce::money::{Money, Currency};
    /// assert_eq!(Money::from_units(275, Currency::USD).amount_cents, 27500);
    /// ```
    pub fn from_units(units: i64, currency: Currency) -> Self {
        Self::new(units * currency.minor_units(), currency)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities, and amounts too large to hold.
    ///
    /// ```
    /// use shop_commerce::money::{Money, Currency};
    /// let price = Money::try_from_decimal(219.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 21999);
    /// assert!(Money::try_from_decimal(f64::NAN, Currency::USD).is_none());
    /// ```
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let cents = (amount * currency.minor_units() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$275.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "275.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the sum overflows. Use `try_add`
    /// for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other)
            .expect("Currency mismatch or overflow in addition")
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the difference overflows.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch or overflow in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_sub(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Multiply by a signed scalar (a quantity or a quantity delta).
    ///
    /// # Panics
    /// Panics on overflow. Use `checked_multiply` when the factor is unbounded.
    pub fn multiply(&self, factor: i64) -> Money {
        self.checked_multiply(factor)
            .expect("Overflow in multiplication")
    }

    /// Multiply by a signed scalar, returning None on overflow.
    pub fn checked_multiply(&self, factor: i64) -> Option<Money> {
        let cents = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(cents, self.currency))
    }

    /// Sum Money values.
    ///
    /// # Panics
    /// Panics if any value is in a different currency or the sum overflows.
    pub fn sum(iter: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        iter.into_iter().fold(Money::zero(currency), |acc, m| acc + m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_units() {
        let m = Money::from_units(250, Currency::USD);
        assert_eq!(m.amount_cents, 25000);

        let m = Money::from_units(250, Currency::JPY);
        assert_eq!(m.amount_cents, 250);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::try_from_decimal(199.99, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 19999);

        let m = Money::try_from_decimal(-0.5, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, -50);
    }

    #[test]
    fn test_money_from_decimal_rejects_unrepresentable() {
        assert!(Money::try_from_decimal(f64::NAN, Currency::USD).is_none());
        assert!(Money::try_from_decimal(f64::INFINITY, Currency::USD).is_none());
        assert!(Money::try_from_decimal(1e17, Currency::USD).is_none());
        assert!(Money::try_from_decimal(1e30, Currency::JPY).is_none());
        assert!(Money::try_from_decimal(1e16, Currency::JPY).is_some());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_units(275, Currency::USD).display(), "$275.00");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(-1250, Currency::USD).display_amount(), "-12.50");
    }

    #[test]
    fn test_signed_delta_arithmetic() {
        let price = Money::from_units(230, Currency::USD);
        let total = price * 3;
        let reduced = total + price * -2;
        assert_eq!(reduced, price);
        assert_eq!(reduced - price, Money::zero(Currency::USD));
    }

    #[test]
    fn test_money_sum() {
        let prices = [
            Money::from_units(275, Currency::USD),
            Money::from_units(250, Currency::USD),
        ];
        let total = Money::sum(prices, Currency::USD);
        assert_eq!(total.amount_cents, 52500);
    }

    #[test]
    fn test_checked_arithmetic_detects_overflow() {
        let big = Money::new(i64::MAX - 10, Currency::USD);
        let small = Money::new(100, Currency::USD);
        assert!(big.try_add(&small).is_none());
        assert!(Money::new(i64::MIN + 10, Currency::USD).try_subtract(&small).is_none());
        assert!(big.checked_multiply(2).is_none());
        assert_eq!(small.checked_multiply(-3), Some(Money::new(-300, Currency::USD)));
    }

    #[test]
    fn test_try_add_rejects_mixed_currencies() {
        let usd = Money::from_units(10, Currency::USD);
        let eur = Money::from_units(10, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(usd.try_subtract(&eur).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        let _ = usd + eur;
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" MXN ".parse::<Currency>(), Ok(Currency::MXN));
        assert!(matches!(
            "ARS".parse::<Currency>(),
            Err(CommerceError::UnknownCurrency(_))
        ));
    }
}
