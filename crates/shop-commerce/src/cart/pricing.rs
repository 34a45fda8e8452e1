//! Checkout pricing.

use crate::cart::{CartState, LineItemKey};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What the cart would be charged at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Amount due.
    pub total: Money,
}

impl CheckoutSummary {
    /// Price a cart state.
    pub fn from_state(state: &CartState) -> Self {
        let lines = state
            .items()
            .iter()
            .map(|item| {
                let quantity = i64::from(item.quantity);
                LinePricing {
                    key: item.key(),
                    product_name: item.product.name.clone(),
                    unit_price: item.unit_price(),
                    quantity: item.quantity,
                    subtotal: item.line_total(),
                    savings: item.product.savings() * quantity,
                }
            })
            .collect();

        Self {
            lines,
            item_count: state.item_count(),
            total: state.total(),
        }
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total saved against original prices, saturating at the largest
    /// representable amount.
    pub fn savings(&self) -> Money {
        let cents = self
            .lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.savings.amount_cents));
        Money::new(cents, self.total.currency)
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Line item key.
    pub key: LineItemKey,
    /// Product name.
    pub product_name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
    /// Saved against the original price, across the whole line.
    pub savings: Money,
}
