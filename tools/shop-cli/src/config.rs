//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::search::{PriceRange, DEFAULT_MAX_PRICE};
use shop_commerce::{Currency, Money};
use shop_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Default filter configuration.
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Session logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> Result<Currency> {
        self.catalog
            .currency
            .parse()
            .with_context(|| format!("Invalid catalog.currency: {}", self.catalog.currency))
    }

    /// Default price range for product listings.
    pub fn price_range(&self, currency: Currency) -> Result<PriceRange> {
        price_range(self.filters.min_price, self.filters.max_price, currency)
    }
}

/// Build a price range from decimal bounds.
pub fn price_range(min: f64, max: f64, currency: Currency) -> Result<PriceRange> {
    let min = Money::try_from_decimal(min, currency)
        .with_context(|| format!("Invalid minimum price: {}", min))?;
    let max = Money::try_from_decimal(max, currency)
        .with_context(|| format!("Invalid maximum price: {}", max))?;
    Ok(PriceRange::new(min, max)?)
}

/// Catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Currency code (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
        }
    }
}

/// Default filter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Lower bound of the default price range.
    #[serde(default)]
    pub min_price: f64,

    /// Upper bound of the default price range.
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE as f64
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: default_max_price(),
        }
    }
}

/// Session logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format for cart event logs.
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Minimum level for cart event logs.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# SoccerShop storefront configuration

[catalog]
# path = "catalog.json"
currency = "{currency}"

[filters]
min_price = 0
max_price = {max_price}

[logging]
format = "human"
level = "warn"
"#,
        currency = default_currency(),
        max_price = DEFAULT_MAX_PRICE
    )
}
