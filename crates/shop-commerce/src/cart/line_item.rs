//! Cart line items and their identity key.

use crate::catalog::{Product, ShoeSize};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identity of a line item: one product in one size and one color.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineItemKey {
    /// Product ID.
    pub product_id: ProductId,
    /// Selected size.
    pub size: ShoeSize,
    /// Selected color.
    pub color: String,
}

impl LineItemKey {
    /// Create a key.
    pub fn new(product_id: impl Into<ProductId>, size: ShoeSize, color: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            size,
            color: color.into(),
        }
    }
}

/// Renders as `"{id}-{size}-{color}"`, for use as a UI element key.
impl fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

/// A product selection in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// The catalog product.
    pub product: Arc<Product>,
    /// Selected size.
    pub size: ShoeSize,
    /// Selected color.
    pub color: String,
    /// Quantity (always at least 1 while the item is in a cart).
    pub quantity: u32,
}

impl CartLineItem {
    pub(crate) fn new(product: Arc<Product>, size: ShoeSize, color: String) -> Self {
        Self {
            product,
            size,
            color,
            quantity: 1,
        }
    }

    /// This item's identity key.
    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(self.product.id.clone(), self.size, self.color.clone())
    }

    /// Check whether this item is identified by `key`, without allocating.
    pub fn matches(&self, key: &LineItemKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}
