//! Product types.

use crate::catalog::{Category, ShoeSize};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Largest accepted unit price, in whole currency units.
pub const MAX_PRICE_UNITS: i64 = 1_000_000;

/// A cleat in the catalog.
///
/// Products are loaded once and never mutated; carts and filtered listings
/// share them through `Arc<Product>`. They serialize the way catalog files
/// are written: camelCase keys and decimal prices, plus the price currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name (e.g., "Nike").
    pub brand: String,
    /// Short marketing description.
    pub description: String,
    /// Current price.
    pub price: Money,
    /// Price before the current discount, when on sale.
    pub original_price: Option<Money>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Playing surface.
    pub category: Category,
    /// Available sizes, in display order.
    pub sizes: Vec<ShoeSize>,
    /// Available color names, in display order.
    pub colors: Vec<String>,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Whether the product carries the "new" badge.
    pub is_new: bool,
    /// Whether the product is on sale.
    pub is_on_sale: bool,
}

impl Product {
    /// Create a product with no sizes, colors or badges.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            description: String::new(),
            price,
            original_price: None,
            image_url: None,
            category,
            sizes: Vec::new(),
            colors: Vec::new(),
            features: Vec::new(),
            is_new: false,
            is_on_sale: false,
        }
    }

    /// Set the sizes.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = ShoeSize>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Set the colors.
    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as on sale, optionally recording the pre-discount price.
    pub fn on_sale(mut self, original_price: Option<Money>) -> Self {
        self.is_on_sale = true;
        self.original_price = original_price;
        self
    }

    /// Size preselected by product cards (the first one listed).
    pub fn default_size(&self) -> Option<ShoeSize> {
        self.sizes.first().copied()
    }

    /// Color preselected by product cards (the first one listed).
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Check whether a size/color combination is one the product lists.
    ///
    /// The cart accepts any combination; this is for callers that want to
    /// validate a selection before adding it.
    pub fn offers(&self, size: ShoeSize, color: &str) -> bool {
        self.sizes.contains(&size) && self.colors.iter().any(|c| c == color)
    }

    /// Discount relative to `original_price`, as a percentage.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original.currency == self.price.currency
                && original.amount_cents > self.price.amount_cents
            {
                let savings = original.amount_cents - self.price.amount_cents;
                Some((savings as f64 / original.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check that every price is in `currency`, non-negative, and no more
    /// than [`MAX_PRICE_UNITS`].
    pub fn validate_prices(&self, currency: Currency) -> Result<(), CommerceError> {
        self.validate_price(&self.price, currency)?;
        if let Some(original) = &self.original_price {
            self.validate_price(original, currency)?;
        }
        Ok(())
    }

    fn validate_price(&self, price: &Money, currency: Currency) -> Result<(), CommerceError> {
        if price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.to_string(),
                got: price.currency.to_string(),
            });
        }
        let ceiling = Money::from_units(MAX_PRICE_UNITS, currency);
        if price.is_negative() || price.amount_cents > ceiling.amount_cents {
            return Err(CommerceError::InvalidPrice {
                product_id: self.id.to_string(),
                price: price.display(),
            });
        }
        Ok(())
    }

    /// Amount saved per unit compared to `original_price` (zero when not discounted).
    pub fn savings(&self) -> Money {
        match self.original_price {
            Some(original)
                if original.currency == self.price.currency
                    && original.amount_cents > self.price.amount_cents =>
            {
                original - self.price
            }
            _ => Money::zero(self.price.currency),
        }
    }
}

/// Product as written in catalog files.
///
/// `currency` is optional; catalog loading fills in the catalog's currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    brand: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<Currency>,
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    category: Category,
    sizes: Vec<ShoeSize>,
    colors: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    is_on_sale: bool,
}

impl ProductRecord {
    /// Convert, pricing in `default_currency` unless the record names one.
    pub(crate) fn into_product(self, default_currency: Currency) -> Result<Product, CommerceError> {
        let currency = self.currency.unwrap_or(default_currency);
        let price = decimal_price(&self.id, self.price, currency)?;
        let original_price = self
            .original_price
            .map(|amount| decimal_price(&self.id, amount, currency))
            .transpose()?;

        Ok(Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            description: self.description,
            price,
            original_price,
            image_url: self.image_url,
            category: self.category,
            sizes: self.sizes,
            colors: self.colors,
            features: self.features,
            is_new: self.is_new,
            is_on_sale: self.is_on_sale,
        })
    }
}

fn decimal_price(id: &ProductId, amount: f64, currency: Currency) -> Result<Money, CommerceError> {
    Money::try_from_decimal(amount, currency).ok_or_else(|| CommerceError::InvalidPrice {
        product_id: id.to_string(),
        price: amount.to_string(),
    })
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        record.into_product(Currency::default())
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            brand: product.brand,
            description: product.description,
            price: product.price.to_decimal(),
            original_price: product.original_price.map(|price| price.to_decimal()),
            currency: Some(product.price.currency),
            image_url: product.image_url,
            category: product.category,
            sizes: product.sizes,
            colors: product.colors,
            features: product.features,
            is_new: product.is_new,
            is_on_sale: product.is_on_sale,
        }
    }
}
