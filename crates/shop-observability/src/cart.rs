//! Cart event logging.

use shop_commerce::cart::{CartEvent, CartObserver, CartState};

use crate::logging::{LogBuilder, LogEntry, StructuredLogger};

impl StructuredLogger {
    /// Build the log entry for a cart event, or `None` if filtered out.
    pub fn cart_event_entry(&self, event: &CartEvent, state: &CartState) -> Option<LogEntry> {
        self.cart_event_builder(event, state).build()
    }

    fn cart_event_builder(&self, event: &CartEvent, state: &CartState) -> LogBuilder<'_> {
        let builder = self
            .info_builder(format!("cart {}", event.name().replace('_', " ")))
            .field("event", event.name());

        let builder = match event {
            CartEvent::ItemAdded {
                key,
                product_name,
                quantity,
            } => builder
                .field("key", key.to_string())
                .field("product", product_name.as_str())
                .field_u64("quantity", u64::from(*quantity)),
            CartEvent::ItemRemoved { key, quantity } => builder
                .field("key", key.to_string())
                .field_u64("quantity", u64::from(*quantity)),
            CartEvent::QuantityUpdated { key, from, to } => builder
                .field("key", key.to_string())
                .field_u64("from", u64::from(*from))
                .field_u64("to", u64::from(*to)),
            CartEvent::Cleared { items } => builder.field_u64("items", *items as u64),
        };

        builder
            .field_u64("item_count", state.item_count())
            .field("total", state.total().display())
    }
}

impl CartObserver for StructuredLogger {
    fn on_event(&self, event: &CartEvent, state: &CartState) {
        self.cart_event_builder(event, state).emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use shop_commerce::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_cart_event_entry() {
        let logger = StructuredLogger::new(SessionId::new("sess_cart"));
        let catalog = Catalog::builtin();
        let predator = catalog.get(&ProductId::new("2")).unwrap();

        let mut cart = CartStore::new(catalog.currency());
        let key = cart.add_item(predator, ShoeSize::from_tenths(90), "Negro/Rojo");
        cart.add_item(predator, ShoeSize::from_tenths(90), "Negro/Rojo");

        let event = CartEvent::ItemAdded {
            key,
            product_name: predator.name.clone(),
            quantity: 2,
        };
        let entry = logger.cart_event_entry(&event, cart.state()).unwrap();

        assert_eq!(entry.message, "cart item added");
        assert_eq!(entry.session_id, "sess_cart");
        assert_eq!(entry.fields["key"], "2-9-Negro/Rojo");
        assert_eq!(entry.fields["product"], "Predator Accuracy.1");
        assert_eq!(entry.fields["quantity"], 2);
        assert_eq!(entry.fields["item_count"], 2);
        assert_eq!(entry.fields["total"], "$500.00");
    }

    #[test]
    fn test_cleared_entry_filtered_by_level() {
        let logger = StructuredLogger::new(SessionId::new("sess_cart")).with_min_level(LogLevel::Warn);
        let cart = CartStore::default();
        let event = CartEvent::Cleared { items: 0 };
        assert!(logger.cart_event_entry(&event, cart.state()).is_none());
    }

    #[test]
    fn test_logger_as_observer() {
        let logger = StructuredLogger::new(SessionId::generate()).with_min_level(LogLevel::Error);
        let mut cart = CartStore::default().with_observer(Arc::new(logger));
        cart.add_item(
            Catalog::builtin().get(&ProductId::new("6")).unwrap(),
            ShoeSize::from_tenths(75),
            "Amarillo/Negro",
        );
        assert_eq!(cart.item_count(), 1);
    }
}
