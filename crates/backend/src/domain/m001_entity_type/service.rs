use std::collections::HashSet;

use contracts::domain::m001_entity_type::aggregate::{
    validate_properties, CustomProperty, EntityType, TypeCategory,
};
use thiserror::Error;
use uuid::Uuid;

use super::repository;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("entity type not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub async fn list_entity_types(
    category: Option<TypeCategory>,
) -> Result<Vec<EntityType>, ServiceError> {
    Ok(repository::list_all(category).await?)
}

pub async fn get_entity_type(id: Uuid) -> Result<EntityType, ServiceError> {
    repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)
}

/// Replace the custom-property list of an entity type.
///
/// The incoming list must be structurally valid (non-blank, unique names)
/// and every property type must reference a known field type.
pub async fn update_custom_properties(
    id: Uuid,
    properties: Vec<CustomProperty>,
) -> Result<EntityType, ServiceError> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    validate_properties(&properties).map_err(ServiceError::Validation)?;

    let field_types = repository::list_all(Some(TypeCategory::Field)).await?;
    let known: HashSet<String> = field_types.into_iter().map(|t| t.name).collect();
    let unknown = unknown_property_types(&properties, &known);
    if !unknown.is_empty() {
        return Err(ServiceError::Validation(format!(
            "Unknown property type(s): {}",
            unknown.join(", ")
        )));
    }

    aggregate.set_custom_properties(properties);
    aggregate.validate().map_err(ServiceError::Validation)?;
    repository::update(&aggregate).await?;

    tracing::info!(
        entity_type = %aggregate.name,
        properties = aggregate.custom_properties.len(),
        "custom properties updated"
    );
    Ok(aggregate)
}

fn unknown_property_types(properties: &[CustomProperty], known: &HashSet<String>) -> Vec<String> {
    let mut unknown: Vec<String> = properties
        .iter()
        .map(|p| p.property_type.name.clone())
        .filter(|name| !known.contains(name))
        .collect();
    unknown.sort();
    unknown.dedup();
    unknown
}

// ============================================================================
// Seed catalog
// ============================================================================

/// Built-in field types usable as custom property values: (name, display
/// name, description).
const FIELD_TYPE_SEEDS: &[(&str, &str, &str)] = &[
    ("string", "String", "A short free-form text value."),
    ("markdown", "Markdown", "Rich text stored as markdown source."),
    ("integer", "Integer", "A whole number."),
    ("number", "Number", "A floating point number."),
    ("date", "Date", "A calendar date (ISO 8601)."),
    ("duration", "Duration", "A time span (ISO 8601 duration)."),
    ("enum", "Enum", "One value out of a fixed set."),
];

/// Starter entity types so a fresh database renders real data:
/// (name, display name, description).
const ENTITY_TYPE_SEEDS: &[(&str, &str, &str)] = &[
    ("table", "Table", "A table in a database or warehouse."),
    ("topic", "Topic", "A stream of events in a messaging system."),
    ("dashboard", "Dashboard", "A visualization surface in a BI tool."),
    ("pipeline", "Pipeline", "A scheduled data workflow."),
];

/// Insert the built-in catalog on first run. Idempotent: does nothing when
/// the table already has rows.
pub async fn ensure_seed_data() -> anyhow::Result<()> {
    if repository::count_all().await? > 0 {
        return Ok(());
    }
    tracing::info!("Empty catalog detected, seeding built-in types");

    for (name, display_name, description) in FIELD_TYPE_SEEDS {
        let field_type = EntityType::new_for_insert(
            name.to_string(),
            Some(display_name.to_string()),
            TypeCategory::Field,
            Some(description.to_string()),
        );
        repository::insert(&field_type).await?;
    }

    let string_ref = repository::get_by_name("string").await?.map(|t| t.as_reference());
    let markdown_ref = repository::get_by_name("markdown").await?.map(|t| t.as_reference());

    for (name, display_name, description) in ENTITY_TYPE_SEEDS {
        let mut entity_type = EntityType::new_for_insert(
            name.to_string(),
            Some(display_name.to_string()),
            TypeCategory::Entity,
            Some(description.to_string()),
        );
        // Give the table type a couple of properties so the details screen
        // is populated out of the box.
        if *name == "table" {
            if let (Some(string_ref), Some(markdown_ref)) = (&string_ref, &markdown_ref) {
                entity_type.custom_properties = vec![
                    CustomProperty {
                        name: "owner".to_string(),
                        property_type: string_ref.clone(),
                        description: Some("Team that owns the table.".to_string()),
                    },
                    CustomProperty {
                        name: "usageNotes".to_string(),
                        property_type: markdown_ref.clone(),
                        description: None,
                    },
                ];
            }
        }
        repository::insert(&entity_type).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityReference;

    #[test]
    fn test_seed_names_are_unique() {
        let mut names: Vec<&str> = FIELD_TYPE_SEEDS
            .iter()
            .chain(ENTITY_TYPE_SEEDS.iter())
            .map(|(name, _, _)| *name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_unknown_property_types_reports_missing_names() {
        let known: HashSet<String> =
            ["string".to_string(), "markdown".to_string()].into_iter().collect();
        let properties = vec![
            CustomProperty {
                name: "owner".to_string(),
                property_type: type_ref("string"),
                description: None,
            },
            CustomProperty {
                name: "geo".to_string(),
                property_type: type_ref("geopoint"),
                description: None,
            },
        ];

        assert_eq!(unknown_property_types(&properties, &known), vec!["geopoint"]);
    }

    fn type_ref(name: &str) -> EntityReference {
        EntityReference {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            display_name: None,
            kind: "type".to_string(),
            fully_qualified_name: None,
        }
    }
}
