//! Playing-surface categories for cleats.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown for the "no category" filter option.
pub const ALL_CATEGORIES_LABEL: &str = "Todas las categorías";

/// The surface a cleat is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Natural grass on firm ground.
    FirmGround,
    /// Wet or muddy natural grass.
    SoftGround,
    /// Artificial turf.
    ArtificialGrass,
    /// Indoor courts and futsal.
    Indoor,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::FirmGround,
        Category::SoftGround,
        Category::ArtificialGrass,
        Category::Indoor,
    ];

    /// Slug used in catalogs and filter specs (e.g., "firm-ground").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FirmGround => "firm-ground",
            Category::SoftGround => "soft-ground",
            Category::ArtificialGrass => "artificial-grass",
            Category::Indoor => "indoor",
        }
    }

    /// Storefront label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FirmGround => "Terreno Firme",
            Category::SoftGround => "Terreno Blando",
            Category::ArtificialGrass => "Césped Artificial",
            Category::Indoor => "Sala/Fútsal",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "firm-ground" => Ok(Category::FirmGround),
            "soft-ground" => Ok(Category::SoftGround),
            "artificial-grass" => Ok(Category::ArtificialGrass),
            "indoor" => Ok(Category::Indoor),
            _ => Err(CommerceError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_slug() {
        let err = "beach".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("beach".to_string()));
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Category::ArtificialGrass).unwrap();
        assert_eq!(json, "\"artificial-grass\"");

        let parsed: Category = serde_json::from_str("\"soft-ground\"").unwrap();
        assert_eq!(parsed, Category::SoftGround);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::FirmGround.label(), "Terreno Firme");
        assert_eq!(Category::Indoor.label(), "Sala/Fútsal");
    }
}
