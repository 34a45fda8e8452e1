//! Shopping cart module.
//!
//! Contains the cart store, line items, cart events and checkout pricing.

mod cart;
mod events;
mod line_item;
mod pricing;

pub use cart::{CartState, CartStore};
pub use events::{CartEvent, CartObserver, TracingObserver};
pub use line_item::{CartLineItem, LineItemKey};
pub use pricing::{CheckoutSummary, LinePricing};
