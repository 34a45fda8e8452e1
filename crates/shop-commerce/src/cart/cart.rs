//! The cart store.

use crate::cart::{CartEvent, CartLineItem, CartObserver, CheckoutSummary, LineItemKey};
use crate::catalog::{Product, ShoeSize};
use crate::money::{Currency, Money};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The contents of a cart.
///
/// `total` always equals the sum of `price * quantity` over `items`. The only
/// way to change a `CartState` is through a [`CartStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: Money,
}

impl CartState {
    fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
        }
    }

    /// Line items, in the order they were first added.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Running total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Total recomputed from the line items.
    pub fn recomputed_total(&self) -> Money {
        Money::sum(self.items.iter().map(CartLineItem::line_total), self.total.currency)
    }

    fn position(&self, key: &LineItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.matches(key))
    }
}

/// Owns one cart and applies every change to it.
///
/// Operations never fail: keys that match no line item are ignored. Each
/// effective change is reported to the registered observers.
#[derive(Clone)]
pub struct CartStore {
    state: CartState,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            state: CartState::empty(currency),
            observers: Vec::new(),
        }
    }

    /// Register an observer (builder style).
    pub fn with_observer(mut self, observer: Arc<dyn CartObserver>) -> Self {
        self.subscribe(observer);
        self
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Add one unit of `product` in `size` and `color`.
    ///
    /// Merges into the existing line with the same key, otherwise appends a
    /// new line. The size and color are not checked against the product's
    /// lists; see [`Product::offers`].
    ///
    /// A line already holding `u32::MAX` units, or a total that would
    /// overflow, leaves the cart unchanged and emits no event.
    ///
    /// # Panics
    /// Panics if the product's prices fail [`Product::validate_prices`] for
    /// the cart's currency.
    pub fn add_item(
        &mut self,
        product: &Arc<Product>,
        size: ShoeSize,
        color: impl Into<String>,
    ) -> LineItemKey {
        if let Err(err) = product.validate_prices(self.currency()) {
            panic!("Cannot add {} to the cart: {}", product.id, err);
        }

        let key = LineItemKey::new(product.id.clone(), size, color);
        let index = self.state.position(&key);

        let (price, quantity) = match index {
            Some(index) => {
                let item = &self.state.items[index];
                (item.unit_price(), item.quantity.checked_add(1))
            }
            None => (product.price, Some(1)),
        };
        let Some((quantity, total)) = quantity.zip(self.state.total.try_add(&price)) else {
            tracing::warn!(%key, "cart line or total at capacity; item not added");
            return key;
        };

        match index {
            Some(index) => self.state.items[index].quantity = quantity,
            None => self.state.items.push(CartLineItem::new(
                Arc::clone(product),
                size,
                key.color.clone(),
            )),
        }
        self.state.total = total;

        self.notify(CartEvent::ItemAdded {
            key: key.clone(),
            product_name: product.name.clone(),
            quantity,
        });
        key
    }

    /// Remove a line item entirely. Returns false if no line matched.
    pub fn remove_item(&mut self, key: &LineItemKey) -> bool {
        let Some(index) = self.state.position(key) else {
            return false;
        };

        let item = self.state.items.remove(index);
        self.state.total = self.state.total - item.line_total();

        self.notify(CartEvent::ItemRemoved {
            key: key.clone(),
            quantity: item.quantity,
        });
        true
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the line, exactly like
    /// [`remove_item`](Self::remove_item). Returns false, leaving the cart
    /// unchanged, when no line matched or when the quantity does not fit in
    /// a `u32` or would overflow the total.
    pub fn update_quantity(&mut self, key: &LineItemKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(key);
        }
        let Some(index) = self.state.position(key) else {
            return false;
        };
        let Ok(to) = u32::try_from(quantity) else {
            tracing::warn!(%key, quantity, "quantity out of range; line unchanged");
            return false;
        };

        let item = &self.state.items[index];
        let from = item.quantity;
        if from == to {
            return true;
        }

        let delta = i64::from(to) - i64::from(from);
        let Some(total) = item
            .unit_price()
            .checked_multiply(delta)
            .and_then(|adjustment| self.state.total.try_add(&adjustment))
        else {
            tracing::warn!(%key, quantity, "cart total would overflow; line unchanged");
            return false;
        };

        self.state.items[index].quantity = to;
        self.state.total = total;

        self.notify(CartEvent::QuantityUpdated {
            key: key.clone(),
            from,
            to,
        });
        true
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        let items = self.state.items.len();
        self.state = CartState::empty(self.state.total.currency);
        self.notify(CartEvent::Cleared { items });
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.state.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Look up a line item.
    pub fn get_item(&self, key: &LineItemKey) -> Option<&CartLineItem> {
        self.state.items.iter().find(|item| item.matches(key))
    }

    /// Line items, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    /// Running total.
    pub fn total(&self) -> Money {
        self.state.total
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> Currency {
        self.state.total.currency
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// Price the cart for checkout without changing it.
    pub fn checkout(&self) -> CheckoutSummary {
        let summary = CheckoutSummary::from_state(&self.state);
        tracing::info!(
            items = summary.item_count,
            total = %summary.total,
            "checkout requested"
        );
        summary
    }

    fn notify(&self, event: CartEvent) {
        debug_assert_eq!(self.state.total, self.state.recomputed_total());
        for observer in &self.observers {
            observer.on_event(&event, &self.state);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
