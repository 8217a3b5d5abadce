//! Subcategory Model

use serde::{Deserialize, Serialize};

/// Subcategory entity (cross-cutting tag on categories: ENTRADA, POSTRES, ...)
///
/// Subcategory names are the unit quota and exclusion rules are written
/// against, so comparisons are always by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
}

impl Subcategory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Subcategories with operational meaning (default rules and seed data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnownSubcategory {
    PlatoDeFondo,
    Entrada,
    PanDeAcompanamiento,
    Fria,
    Hipocalorico,
    Sandwich,
    Caliente,
    Postres,
}

impl KnownSubcategory {
    /// Stored display name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlatoDeFondo => "PLATO DE FONDO",
            Self::Entrada => "ENTRADA",
            Self::PanDeAcompanamiento => "PAN DE ACOMPAÑAMIENTO",
            Self::Fria => "FRIA",
            Self::Hipocalorico => "HIPOCALORICO",
            Self::Sandwich => "SANDWICH",
            Self::Caliente => "CALIENTE",
            Self::Postres => "POSTRES",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KNOWN_SUBCATEGORIES
            .iter()
            .copied()
            .find(|s| s.as_str() == name)
    }
}

impl std::fmt::Display for KnownSubcategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ALL_KNOWN_SUBCATEGORIES: [KnownSubcategory; 8] = [
    KnownSubcategory::PlatoDeFondo,
    KnownSubcategory::Entrada,
    KnownSubcategory::PanDeAcompanamiento,
    KnownSubcategory::Fria,
    KnownSubcategory::Hipocalorico,
    KnownSubcategory::Sandwich,
    KnownSubcategory::Caliente,
    KnownSubcategory::Postres,
];

/// Subcategories a complete individual menu must contain when the menu offers them
pub const REQUIRED_SUBCATEGORIES: [KnownSubcategory; 3] = [
    KnownSubcategory::PlatoDeFondo,
    KnownSubcategory::Entrada,
    KnownSubcategory::PanDeAcompanamiento,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(KnownSubcategory::PlatoDeFondo.as_str(), "PLATO DE FONDO");
        assert_eq!(
            KnownSubcategory::from_name("PAN DE ACOMPAÑAMIENTO"),
            Some(KnownSubcategory::PanDeAcompanamiento)
        );
        assert_eq!(KnownSubcategory::from_name("entrada"), None);
    }
}
