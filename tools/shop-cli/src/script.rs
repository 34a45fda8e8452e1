//! Cart session scripts.
//!
//! A script is a list of storefront actions, written in TOML:
//!
//! ```toml
//! [[actions]]
//! action = "add"
//! product = "1"
//! size = 8.5
//! color = "Negro/Oro"
//!
//! [[actions]]
//! action = "update"
//! product = "1"
//! size = 8.5
//! color = "Negro/Oro"
//! quantity = 3
//!
//! [[actions]]
//! action = "checkout"
//! ```
//!
//! or the equivalent JSON (`{"actions": [...]}`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::catalog::ShoeSize;
use shop_commerce::ProductId;

/// A scripted cart session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    /// Actions in the order they are dispatched.
    #[serde(default)]
    pub actions: Vec<ScriptAction>,
}

impl SessionScript {
    /// Load a script from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session script: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON script: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML script: {}", path.display()))
        }
    }
}

/// One storefront action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScriptAction {
    /// Add one unit. Size and color default to the product card's preselection.
    Add {
        product: ProductId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<ShoeSize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// Remove a line.
    Remove {
        product: ProductId,
        size: ShoeSize,
        color: String,
    },
    /// Set a line's quantity.
    Update {
        product: ProductId,
        size: ShoeSize,
        color: String,
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
    /// Price the cart for checkout.
    Checkout,
}

impl ScriptAction {
    /// Action name as written in scripts.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptAction::Add { .. } => "add",
            ScriptAction::Remove { .. } => "remove",
            ScriptAction::Update { .. } => "update",
            ScriptAction::Clear => "clear",
            ScriptAction::Checkout => "checkout",
        }
    }
}
