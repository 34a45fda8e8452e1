//! Storefront domain types and logic for SoccerShop.
//!
//! This crate holds everything the storefront does that is not rendering:
//!
//! - **Catalog**: Products, categories, shoe sizes, the built-in cleat catalog
//! - **Search**: The filter specification and the catalog filter
//! - **Cart**: The cart store, its line items, events and checkout summary
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//!
//! // Only Nike cleats that are on sale
//! let spec = FilterSpec::default().with_brand("Nike").with_on_sale(true);
//! let visible = catalog.filter(&spec);
//! assert_eq!(visible.len(), 1);
//!
//! // Put two pairs in the cart
//! let mut cart = CartStore::new(catalog.currency());
//! let product = &visible[0];
//! let size = product.default_size().unwrap();
//! let key = cart.add_item(product, size, "Negro/Oro");
//! cart.add_item(product, size, "Negro/Oro");
//!
//! assert_eq!(cart.get_item(&key).map(|i| i.quantity), Some(2));
//! assert_eq!(cart.total().display(), "$550.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, ShoeSize};

    // Cart
    pub use crate::cart::{
        CartEvent, CartLineItem, CartObserver, CartState, CartStore, CheckoutSummary,
        LineItemKey, LinePricing, TracingObserver,
    };

    // Search
    pub use crate::search::{filter_products, FilterSpec, PriceRange};
}
