//! Product catalog module.
//!
//! Contains types for products, categories, shoe sizes and the catalog itself.

mod catalog;
mod category;
mod data;
mod product;
mod size;

pub use catalog::Catalog;
pub use category::{Category, ALL_CATEGORIES_LABEL};
pub use product::{Product, MAX_PRICE_UNITS};
pub use size::ShoeSize;
