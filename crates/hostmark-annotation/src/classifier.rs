//! Category → display label lookup.

use std::collections::BTreeMap;

use hostmark_core::config::AnnotationConfig;
use hostmark_core::errors::ConfigError;
use hostmark_core::types::Category;

/// Partial mapping from category to the label written onto reinforcement.
///
/// Categories without an entry classify to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLookupTable {
    labels: BTreeMap<Category, String>,
}

impl Default for CategoryLookupTable {
    fn default() -> Self {
        let labels = [
            (Category::Walls, "Wall"),
            (Category::Floors, "Floor"),
            (Category::Roofs, "Roof"),
            (Category::Doors, "Door"),
            (Category::Windows, "Window"),
            (Category::Stairs, "Stair"),
            (Category::Ramps, "Ramp"),
            (Category::Columns, "Column"),
            (Category::StructuralColumns, "Structural Column"),
            (Category::StructuralFraming, "Structural Framing"),
            (Category::StructuralFoundation, "Structural Foundation"),
            (Category::StructuralTrusses, "Structural Truss"),
        ]
        .into_iter()
        .map(|(category, label)| (category, label.to_string()))
        .collect();
        Self { labels }
    }
}

impl CategoryLookupTable {
    /// A table with no entries; everything is unclassified.
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// The default table with `config.category_labels` layered on top.
    pub fn from_config(config: &AnnotationConfig) -> Result<Self, ConfigError> {
        let mut table = Self::default();
        for (name, label) in &config.category_labels {
            let category = name
                .parse::<Category>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: format!("annotation.category_labels.{name}"),
                    message: e.to_string(),
                })?;
            table.insert(category, label.clone());
        }
        Ok(table)
    }

    /// Set the label for `category`, returning the previous one.
    pub fn insert(&mut self, category: Category, label: impl Into<String>) -> Option<String> {
        self.labels.insert(category, label.into())
    }

    /// Unmap `category` so it classifies to `None`.
    pub fn remove(&mut self, category: Category) -> Option<String> {
        self.labels.remove(&category)
    }

    /// Label for `category`, or `None` when the category is absent or unmapped.
    pub fn classify(&self, category: Option<Category>) -> Option<&str> {
        category.and_then(|c| self.labels.get(&c)).map(String::as_str)
    }

    /// Number of mapped categories.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no category is mapped.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doors_classify_as_door() {
        let table = CategoryLookupTable::default();
        assert_eq!(table.classify(Some(Category::Doors)), Some("Door"));
    }

    #[test]
    fn absent_category_has_no_label() {
        assert_eq!(CategoryLookupTable::default().classify(None), None);
    }

    #[test]
    fn unmapped_categories_have_no_label() {
        let table = CategoryLookupTable::default();
        for category in [
            Category::Ceilings,
            Category::GenericModels,
            Category::Furniture,
            Category::Rebar,
        ] {
            assert_eq!(table.classify(Some(category)), None, "{category}");
        }
    }

    #[test]
    fn config_overrides_replace_and_extend() {
        let mut config = AnnotationConfig::default();
        config
            .category_labels
            .insert("Doors".to_string(), "Дверь".to_string());
        config
            .category_labels
            .insert("Furniture".to_string(), "Furniture".to_string());

        let table = CategoryLookupTable::from_config(&config).unwrap();
        assert_eq!(table.classify(Some(Category::Doors)), Some("Дверь"));
        assert_eq!(table.classify(Some(Category::Furniture)), Some("Furniture"));
        assert_eq!(table.classify(Some(Category::Walls)), Some("Wall"));
    }

    #[test]
    fn config_with_unknown_category_is_rejected() {
        let mut config = AnnotationConfig::default();
        config
            .category_labels
            .insert("Doorz".to_string(), "Door".to_string());
        match CategoryLookupTable::from_config(&config) {
            Err(ConfigError::InvalidValue { message, .. }) => {
                assert_eq!(message, "unknown category: Doorz")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
