use crate::domain::common::{AggregateId, EntityMetadata, EntityReference};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityTypeId(pub Uuid);

impl EntityTypeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EntityTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EntityTypeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Category
// ============================================================================

/// Whether a type describes a catalog object or a primitive property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Primitive types usable as custom property values (string, markdown, ...)
    Field,
    /// Schema-bearing catalog types (table, topic, ...), extensible with
    /// custom properties
    Entity,
}

impl TypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Field => "field",
            TypeCategory::Entity => "entity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "field" => Some(TypeCategory::Field),
            "entity" => Some(TypeCategory::Entity),
            _ => None,
        }
    }
}

// ============================================================================
// Custom properties
// ============================================================================

/// A user-defined attribute attached to an entity type.
///
/// The name is the unique key within the owning list; list order is display
/// order and has no further meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,

    /// Reference to the field type describing the property's values
    #[serde(rename = "propertyType")]
    pub property_type: EntityReference,

    /// Markdown description, optional
    pub description: Option<String>,
}

/// New list where every property named `name` carries `description` instead
/// of its previous one. All other elements and the overall order are
/// untouched.
pub fn with_description(
    properties: &[CustomProperty],
    name: &str,
    description: &str,
) -> Vec<CustomProperty> {
    properties
        .iter()
        .map(|property| {
            if property.name == name {
                CustomProperty {
                    description: Some(description.to_string()),
                    ..property.clone()
                }
            } else {
                property.clone()
            }
        })
        .collect()
}

/// New list minus every property named `name`.
pub fn without_property(properties: &[CustomProperty], name: &str) -> Vec<CustomProperty> {
    properties
        .iter()
        .filter(|property| property.name != name)
        .cloned()
        .collect()
}

/// Structural validation of a custom-property list: non-blank names, no
/// duplicate names.
pub fn validate_properties(properties: &[CustomProperty]) -> Result<(), String> {
    let mut seen: Vec<&str> = Vec::with_capacity(properties.len());
    for property in properties {
        let name = property.name.trim();
        if name.is_empty() {
            return Err("Custom property name must not be empty".into());
        }
        if seen.contains(&name) {
            return Err(format!("Duplicate custom property name: {}", name));
        }
        seen.push(name);
    }
    Ok(())
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An entity type: a schema describing a class of catalog objects,
/// extensible with custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    pub id: EntityTypeId,

    /// Machine name, unique within the catalog (e.g. "table")
    pub name: String,

    #[serde(rename = "displayName")]
    pub display_name: Option<String>,

    #[serde(rename = "fullyQualifiedName")]
    pub fully_qualified_name: String,

    pub category: TypeCategory,

    /// Markdown description, optional
    pub description: Option<String>,

    #[serde(rename = "customProperties", default)]
    pub custom_properties: Vec<CustomProperty>,

    pub metadata: EntityMetadata,
}

impl EntityType {
    /// Create a new entity type for insertion
    pub fn new_for_insert(
        name: String,
        display_name: Option<String>,
        category: TypeCategory,
        description: Option<String>,
    ) -> Self {
        let fully_qualified_name = format!("metadata.types.{}", name);
        Self {
            id: EntityTypeId::new_v4(),
            name,
            display_name,
            fully_qualified_name,
            category,
            description,
            custom_properties: Vec::new(),
            metadata: EntityMetadata::new(),
        }
    }

    /// Title to render for this type
    pub fn display_title(&self) -> String {
        match &self.display_name {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => self.name.clone(),
        }
    }

    /// Reference to this type, for embedding into other aggregates
    pub fn as_reference(&self) -> EntityReference {
        EntityReference {
            id: self.id.as_string(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            kind: "type".to_string(),
            fully_qualified_name: Some(self.fully_qualified_name.clone()),
        }
    }

    /// Replace the custom-property list, refreshing lifecycle metadata
    pub fn set_custom_properties(&mut self, properties: Vec<CustomProperty>) {
        self.custom_properties = properties;
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Validation before persisting
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Entity type name must not be empty".into());
        }
        validate_properties(&self.custom_properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_ref(name: &str) -> EntityReference {
        EntityReference {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            display_name: None,
            kind: "type".to_string(),
            fully_qualified_name: Some(format!("metadata.types.{}", name)),
        }
    }

    fn property(name: &str, description: Option<&str>) -> CustomProperty {
        CustomProperty {
            name: name.to_string(),
            property_type: type_ref("string"),
            description: description.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_with_description_changes_only_the_named_property() {
        let before = vec![
            property("owner", Some("old")),
            property("tier", None),
            property("retention", Some("90 days")),
        ];

        let after = with_description(&before, "tier", "gold/silver/bronze");

        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].name, "tier");
        assert_eq!(after[1].description.as_deref(), Some("gold/silver/bronze"));
        assert_eq!(after[1].property_type, before[1].property_type);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_with_description_unknown_name_is_a_no_op() {
        let before = vec![property("owner", Some("old"))];
        let after = with_description(&before, "missing", "text");
        assert_eq!(after, before);
    }

    #[test]
    fn test_without_property_removes_exactly_one_element() {
        let before = vec![
            property("owner", None),
            property("tier", None),
            property("retention", None),
        ];

        let after = without_property(&before, "tier");

        assert_eq!(after.len(), 2);
        assert_eq!(after[0].name, "owner");
        assert_eq!(after[1].name, "retention");
    }

    #[test]
    fn test_without_property_unknown_name_is_a_no_op() {
        let before = vec![property("owner", None)];
        assert_eq!(without_property(&before, "missing"), before);
    }

    // Degenerate duplicate-name input: name-matching operations apply to
    // every matching element, not just the first.
    #[test]
    fn test_duplicate_names_match_all_elements() {
        let before = vec![
            property("a", Some("first")),
            property("a", Some("second")),
            property("b", None),
        ];

        let deleted = without_property(&before, "a");
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].name, "b");

        let updated = with_description(&before, "a", "same");
        assert_eq!(updated[0].description.as_deref(), Some("same"));
        assert_eq!(updated[1].description.as_deref(), Some("same"));
        assert_eq!(updated[2].description, None);
    }

    #[test]
    fn test_validate_properties_rejects_duplicates_and_blank_names() {
        assert!(validate_properties(&[property("a", None), property("b", None)]).is_ok());
        assert!(validate_properties(&[property("a", None), property("a", None)]).is_err());
        assert!(validate_properties(&[property("  ", None)]).is_err());
    }

    #[test]
    fn test_set_custom_properties_bumps_version() {
        let mut entity_type = EntityType::new_for_insert(
            "table".to_string(),
            Some("Table".to_string()),
            TypeCategory::Entity,
            None,
        );
        let version_before = entity_type.metadata.version;

        entity_type.set_custom_properties(vec![property("owner", None)]);

        assert_eq!(entity_type.custom_properties.len(), 1);
        assert_eq!(entity_type.metadata.version, version_before + 1);
    }
}
