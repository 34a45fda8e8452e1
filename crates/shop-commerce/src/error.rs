//! Commerce error types.
//!
//! Cart operations and catalog filtering never fail. Everything here is raised
//! while *building* domain values: loading a catalog, parsing a category or a
//! size, constructing a price range.

use thiserror::Error;

/// Errors that can occur while constructing storefront values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Unknown category slug.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Shoe size that is negative, zero, not finite or finer than a tenth.
    #[error("Invalid shoe size: {0}")]
    InvalidSize(String),

    /// Negative product price.
    #[error("Invalid price for {product_id}: {price}")]
    InvalidPrice { product_id: String, price: String },

    /// Price range whose lower bound is above its upper bound.
    #[error("Invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: String, max: String },

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::InvalidPriceRange {
            min: "$500.00".to_string(),
            max: "$100.00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price range: min $500.00 is greater than max $100.00"
        );

        let err = CommerceError::UnknownCategory("grass".to_string());
        assert_eq!(err.to_string(), "Unknown category: grass");
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CommerceError = json_err.into();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
