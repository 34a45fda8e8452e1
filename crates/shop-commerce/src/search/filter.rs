//! Catalog filter types.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Upper bound of the default price range, in whole currency units.
pub const DEFAULT_MAX_PRICE: i64 = 500;

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: Money,
    max: Money,
}

impl TryFrom<RangeBounds> for PriceRange {
    type Error = CommerceError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        PriceRange::new(bounds.min, bounds.max)
    }
}

impl PriceRange {
    /// Create a range, rejecting `min > max` and mixed currencies.
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.currency != max.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: min.currency.to_string(),
                got: max.currency.to_string(),
            });
        }
        if min.amount_cents > max.amount_cents {
            return Err(CommerceError::InvalidPriceRange {
                min: min.display(),
                max: max.display(),
            });
        }
        Ok(Self { min, max })
    }

    /// The storefront's default range, `[0, 500]` in `currency`.
    pub fn default_for(currency: Currency) -> Self {
        Self {
            min: Money::zero(currency),
            max: Money::from_units(DEFAULT_MAX_PRICE, currency),
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> Money {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> Money {
        self.max
    }

    /// Check whether a price falls inside the range.
    ///
    /// A price in another currency is never inside.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && self.min.amount_cents <= price.amount_cents
            && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::default_for(Currency::default())
    }
}

/// The criteria a product must meet to be listed.
///
/// An empty `brands` set and a missing `category` leave those criteria
/// unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Brands to include.
    #[serde(default)]
    pub brands: BTreeSet<String>,
    /// Category to include.
    #[serde(default)]
    pub category: Option<Category>,
    /// Inclusive price range.
    #[serde(default)]
    pub price_range: PriceRange,
    /// Only list products on sale.
    #[serde(default)]
    pub on_sale: bool,
}

impl FilterSpec {
    /// An unrestricted spec whose default price range is in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            price_range: PriceRange::default_for(currency),
            ..Self::default()
        }
    }

    /// Add a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the sale-only flag.
    pub fn with_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    /// Flip a brand checkbox. Returns whether the brand is now selected.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        if self.brands.remove(brand) {
            false
        } else {
            self.brands.insert(brand.to_string());
            true
        }
    }

    /// Select a category, or `None` for all categories.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Flip the sale-only checkbox. Returns the new value.
    pub fn toggle_on_sale(&mut self) -> bool {
        self.on_sale = !self.on_sale;
        self.on_sale
    }

    /// Clear every criterion, keeping the price range's currency.
    pub fn reset(&mut self) {
        *self = Self::new(self.price_range.min().currency);
    }

    /// Check if any criterion differs from the default spec.
    pub fn is_active(&self) -> bool {
        *self != Self::new(self.price_range.min().currency)
    }

    /// Check whether a product meets every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        (self.brands.is_empty() || self.brands.contains(&product.brand))
            && self.category.map_or(true, |c| c == product.category)
            && self.price_range.contains(&product.price)
            && (!self.on_sale || product.is_on_sale)
    }
}

/// Products matching `spec`, in input order.
pub fn filter_products(products: &[Arc<Product>], spec: &FilterSpec) -> Vec<Arc<Product>> {
    let matched: Vec<Arc<Product>> = products
        .iter()
        .filter(|product| spec.matches(product))
        .cloned()
        .collect();

    tracing::trace!(
        total = products.len(),
        matched = matched.len(),
        "filtered products"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(units: i64) -> Money {
        Money::from_units(units, Currency::USD)
    }

    fn products() -> Vec<Arc<Product>> {
        vec![
            Arc::new(
                Product::new("A", "A", "Nike", Category::FirmGround, usd(275)).on_sale(None),
            ),
            Arc::new(Product::new("B", "B", "Adidas", Category::FirmGround, usd(250))),
        ]
    }

    fn ids(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_brand_filter() {
        let spec = FilterSpec::default().with_brand("Nike");
        assert_eq!(ids(&filter_products(&products(), &spec)), vec!["A"]);
    }

    #[test]
    fn test_on_sale_filter() {
        let spec = FilterSpec::default().with_on_sale(true);
        assert_eq!(ids(&filter_products(&products(), &spec)), vec!["A"]);
    }

    #[test]
    fn test_default_spec_matches_everything_in_range() {
        let all = filter_products(&products(), &FilterSpec::default());
        assert_eq!(ids(&all), vec!["A", "B"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(usd(250), usd(275)).unwrap();
        assert!(range.contains(&usd(250)));
        assert!(range.contains(&usd(275)));
        assert!(!range.contains(&Money::new(27501, Currency::USD)));

        let spec = FilterSpec::default().with_price_range(PriceRange::new(usd(0), usd(250)).unwrap());
        assert_eq!(ids(&filter_products(&products(), &spec)), vec!["B"]);
    }

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        assert_eq!(
            PriceRange::new(usd(500), usd(100)).unwrap_err(),
            CommerceError::InvalidPriceRange {
                min: "$500.00".to_string(),
                max: "$100.00".to_string(),
            }
        );
        assert!(PriceRange::new(usd(0), Money::from_units(10, Currency::EUR)).is_err());
    }

    #[test]
    fn test_other_currency_never_in_range() {
        let range = PriceRange::default();
        assert!(!range.contains(&Money::from_units(10, Currency::EUR)));
    }

    #[test]
    fn test_category_filter() {
        let spec = FilterSpec::default().with_category(Category::Indoor);
        assert!(filter_products(&products(), &spec).is_empty());
    }

    #[test]
    fn test_toggles_and_reset() {
        let mut spec = FilterSpec::new(Currency::EUR);
        assert!(!spec.is_active());

        assert!(spec.toggle_brand("Puma"));
        assert!(spec.toggle_on_sale());
        spec.set_category(Some(Category::SoftGround));
        assert!(spec.is_active());

        assert!(!spec.toggle_brand("Puma"));
        assert!(spec.brands.is_empty());

        spec.reset();
        assert!(!spec.is_active());
        assert_eq!(spec.price_range, PriceRange::default_for(Currency::EUR));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let spec = FilterSpec::default().with_brand("Adidas");
        let once = filter_products(&products(), &spec);
        let twice = filter_products(&once, &spec);
        assert_eq!(once, twice);
    }
}
