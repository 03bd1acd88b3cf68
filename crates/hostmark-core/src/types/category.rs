//! Closed set of element categories known to the document model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category tag assigned to an element by the document model.
///
/// Canonical names are the plural forms used by the document
/// (`"Doors"`, `"StructuralColumns"`). Parsing is exact; anything else
/// is not a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Walls,
    Floors,
    Ceilings,
    Roofs,
    Doors,
    Windows,
    Stairs,
    Ramps,
    Columns,
    StructuralColumns,
    StructuralFraming,
    StructuralFoundation,
    StructuralTrusses,
    GenericModels,
    Furniture,
    Rebar,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Walls,
        Category::Floors,
        Category::Ceilings,
        Category::Roofs,
        Category::Doors,
        Category::Windows,
        Category::Stairs,
        Category::Ramps,
        Category::Columns,
        Category::StructuralColumns,
        Category::StructuralFraming,
        Category::StructuralFoundation,
        Category::StructuralTrusses,
        Category::GenericModels,
        Category::Furniture,
        Category::Rebar,
    ];

    /// Canonical document name of this category.
    pub fn name(self) -> &'static str {
        match self {
            Self::Walls => "Walls",
            Self::Floors => "Floors",
            Self::Ceilings => "Ceilings",
            Self::Roofs => "Roofs",
            Self::Doors => "Doors",
            Self::Windows => "Windows",
            Self::Stairs => "Stairs",
            Self::Ramps => "Ramps",
            Self::Columns => "Columns",
            Self::StructuralColumns => "StructuralColumns",
            Self::StructuralFraming => "StructuralFraming",
            Self::StructuralFoundation => "StructuralFoundation",
            Self::StructuralTrusses => "StructuralTrusses",
            Self::GenericModels => "GenericModels",
            Self::Furniture => "Furniture",
            Self::Rebar => "Rebar",
        }
    }

    /// Parse a stored category name; `None` for anything outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not a known category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_for_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.name()), Some(category));
        }
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(Category::parse("UnknownCategoryXYZ"), None);
        assert_eq!(Category::parse("doors"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(
            "Door".parse::<Category>(),
            Err(UnknownCategory("Door".to_string()))
        );
    }

    #[test]
    fn unknown_category_names_the_rejected_string() {
        let err = "Door".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: Door");
    }
}
