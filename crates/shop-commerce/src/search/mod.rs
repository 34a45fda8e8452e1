//! Search module.
//!
//! Contains the filter specification and the catalog filter.

mod filter;

pub use filter::{filter_products, FilterSpec, PriceRange, DEFAULT_MAX_PRICE};
