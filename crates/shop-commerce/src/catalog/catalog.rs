//! The product catalog.

use crate::catalog::data::builtin_products;
use crate::catalog::product::ProductRecord;
use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::{filter_products, FilterSpec};
use std::collections::HashSet;
use std::sync::Arc;

/// An immutable, ordered list of products sharing one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Build a catalog, taking the currency from the first product.
    ///
    /// Fails if the products disagree on currency, a price is negative or
    /// above [`MAX_PRICE_UNITS`](crate::catalog::MAX_PRICE_UNITS), or two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        Self::with_currency(currency, products)
    }

    /// Build a catalog whose prices must all be in `currency`.
    pub fn with_currency(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate_prices(currency)?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        tracing::debug!(products = products.len(), %currency, "catalog loaded");
        Ok(Self {
            currency,
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The six cleats of the demo storefront, priced in USD.
    pub fn builtin() -> Self {
        Self {
            currency: Currency::USD,
            products: builtin_products().into_iter().map(Arc::new).collect(),
        }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// Prices are decimal numbers (`"price": 219.99`) in `currency`, keys are
    /// camelCase, and `image` is accepted as an alias of `imageUrl`. This is
    /// also the shape products serialize to, so a product listing written as
    /// JSON loads back as a catalog.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_currency(currency, products)
    }

    /// Currency of every price in the catalog.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Distinct brands, in the order they first appear.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }
        brands
    }

    /// Distinct categories, in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `spec`, in catalog order.
    pub fn filter(&self, spec: &FilterSpec) -> Vec<Arc<Product>> {
        filter_products(&self.products, spec)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    const CATALOG_JSON: &str = r#"[
        {
            "id": "10",
            "name": "Tiempo Legend 10",
            "brand": "Nike",
            "price": 219.99,
            "originalPrice": 249.99,
            "image": "https://example.com/tiempo.jpg",
            "category": "soft-ground",
            "sizes": [8, 8.5, 9],
            "colors": ["Negro/Blanco"],
            "isOnSale": true
        },
        {
            "id": "11",
            "name": "Mundial Team",
            "brand": "Adidas",
            "price": 120,
            "category": "indoor",
            "sizes": [7],
            "colors": ["Negro"]
        }
    ]"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let validated = Catalog::new(builtin_products()).unwrap();
        assert_eq!(validated, Catalog::builtin());
        assert_eq!(validated.len(), 6);
        assert_eq!(validated.currency(), Currency::USD);
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::builtin();
        let copa = catalog.get(&ProductId::new("5")).unwrap();
        assert_eq!(copa.name, "Copa Pure.1");
        assert_eq!(copa.price, Money::from_units(200, Currency::USD));

        assert!(catalog.get(&ProductId::new("99")).is_none());
        assert_eq!(
            catalog.require(&ProductId::new("99")).unwrap_err(),
            CommerceError::ProductNotFound("99".to_string())
        );
    }

    #[test]
    fn test_brands_and_categories_in_first_seen_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.brands(), vec!["Nike", "Adidas", "Puma"]);
        assert_eq!(
            catalog.categories(),
            vec![Category::FirmGround, Category::ArtificialGrass]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let a = Product::new("1", "A", "Nike", Category::Indoor, Money::from_units(10, Currency::USD));
        let b = Product::new("1", "B", "Puma", Category::Indoor, Money::from_units(20, Currency::USD));
        assert_eq!(
            Catalog::new(vec![a, b]).unwrap_err(),
            CommerceError::DuplicateProduct("1".to_string())
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        let bad = Product::new("1", "A", "Nike", Category::Indoor, Money::new(-100, Currency::USD));
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_mixed_currencies() {
        let a = Product::new("1", "A", "Nike", Category::Indoor, Money::from_units(10, Currency::USD));
        let b = Product::new("2", "B", "Puma", Category::Indoor, Money::from_units(20, Currency::EUR));
        assert_eq!(
            Catalog::new(vec![a, b]).unwrap_err(),
            CommerceError::CurrencyMismatch {
                expected: "USD".to_string(),
                got: "EUR".to_string(),
            }
        );
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG_JSON, Currency::USD).unwrap();
        assert_eq!(catalog.len(), 2);

        let tiempo = &catalog.products()[0];
        assert_eq!(tiempo.price.amount_cents, 21999);
        assert_eq!(tiempo.original_price.map(|p| p.amount_cents), Some(24999));
        assert_eq!(tiempo.image_url.as_deref(), Some("https://example.com/tiempo.jpg"));
        assert_eq!(tiempo.category, Category::SoftGround);
        assert!(tiempo.is_on_sale);
        assert!(!tiempo.is_new);

        let mundial = &catalog.products()[1];
        assert!(mundial.features.is_empty());
        assert_eq!(mundial.description, "");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let bad_size = r#"[{"id":"1","name":"A","brand":"Nike","price":10,
            "category":"indoor","sizes":[8.25],"colors":[]}]"#;
        assert!(matches!(
            Catalog::from_json(bad_size, Currency::USD),
            Err(CommerceError::SerializationError(_))
        ));

        let bad_category = r#"[{"id":"1","name":"A","brand":"Nike","price":10,
            "category":"beach","sizes":[8],"colors":[]}]"#;
        assert!(Catalog::from_json(bad_category, Currency::USD).is_err());

        let negative = r#"[{"id":"1","name":"A","brand":"Nike","price":-5,
            "category":"indoor","sizes":[8],"colors":[]}]"#;
        assert!(matches!(
            Catalog::from_json(negative, Currency::USD),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_oversized_prices() {
        let overflowing = r#"[{"id":"1","name":"A","brand":"Nike","price":1e17,
            "category":"indoor","sizes":[8],"colors":["Negro"]}]"#;
        assert!(matches!(
            Catalog::from_json(overflowing, Currency::USD),
            Err(CommerceError::InvalidPrice { .. })
        ));

        let above_ceiling = r#"[{"id":"1","name":"A","brand":"Nike","price":1000000.01,
            "category":"indoor","sizes":[8],"colors":["Negro"]}]"#;
        assert!(matches!(
            Catalog::from_json(above_ceiling, Currency::USD),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_product_listing_loads_back_as_catalog() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(catalog.products()).unwrap();
        assert_eq!(Catalog::from_json(&json, Currency::USD).unwrap(), catalog);

        assert!(matches!(
            Catalog::from_json(&json, Currency::EUR),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.brands().is_empty());
        assert!(catalog.filter(&FilterSpec::default()).is_empty());
    }
}
