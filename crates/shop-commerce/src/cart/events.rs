//! Cart events and observers.
//!
//! A [`CartStore`](crate::cart::CartStore) notifies its observers after every
//! mutation that changed something. Misses (unknown keys) produce no event.

use crate::cart::{CartState, LineItemKey};
use serde::{Deserialize, Serialize};

/// A change applied to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A unit was added; `quantity` is the line's quantity afterwards.
    ItemAdded {
        key: LineItemKey,
        product_name: String,
        quantity: u32,
    },
    /// A line was removed along with its `quantity` units.
    ItemRemoved { key: LineItemKey, quantity: u32 },
    /// A line's quantity was set.
    QuantityUpdated { key: LineItemKey, from: u32, to: u32 },
    /// The cart was emptied; `items` is how many lines it held.
    Cleared { items: usize },
}

impl CartEvent {
    /// Short event name (e.g., "item_added").
    pub fn name(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::QuantityUpdated { .. } => "quantity_updated",
            CartEvent::Cleared { .. } => "cleared",
        }
    }

    /// The line item the event concerns, if any.
    pub fn key(&self) -> Option<&LineItemKey> {
        match self {
            CartEvent::ItemAdded { key, .. }
            | CartEvent::ItemRemoved { key, .. }
            | CartEvent::QuantityUpdated { key, .. } => Some(key),
            CartEvent::Cleared { .. } => None,
        }
    }
}

/// Receives cart events.
///
/// `state` is the cart state after the event was applied.
pub trait CartObserver: Send + Sync {
    /// Handle an event.
    fn on_event(&self, event: &CartEvent, state: &CartState);
}

/// Observer that emits each event as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CartObserver for TracingObserver {
    fn on_event(&self, event: &CartEvent, state: &CartState) {
        let total = state.total();
        match event {
            CartEvent::ItemAdded {
                key,
                product_name,
                quantity,
            } => {
                tracing::debug!(%key, product = %product_name, quantity, %total, "cart item added");
            }
            CartEvent::ItemRemoved { key, quantity } => {
                tracing::debug!(%key, quantity, %total, "cart item removed");
            }
            CartEvent::QuantityUpdated { key, from, to } => {
                tracing::debug!(%key, from, to, %total, "cart quantity updated");
            }
            CartEvent::Cleared { items } => {
                tracing::debug!(items, "cart cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShoeSize;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = CartEvent::QuantityUpdated {
            key: LineItemKey::new("2", ShoeSize::from_tenths(90), "Negro/Rojo"),
            from: 1,
            to: 3,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "quantity_updated");
        assert_eq!(json["key"]["product_id"], "2");
        assert_eq!(json["key"]["size"], 9.0);
        assert_eq!(json["to"], 3);
    }

    #[test]
    fn test_event_name_and_key() {
        let cleared = CartEvent::Cleared { items: 2 };
        assert_eq!(cleared.name(), "cleared");
        assert!(cleared.key().is_none());

        let key = LineItemKey::new("1", ShoeSize::from_tenths(80), "Rojo/Negro");
        let removed = CartEvent::ItemRemoved {
            key: key.clone(),
            quantity: 1,
        };
        assert_eq!(removed.key(), Some(&key));
    }
}
