use chrono::Utc;
use contracts::domain::common::EntityMetadata;
use contracts::domain::m001_entity_type::aggregate::{
    CustomProperty, EntityType, EntityTypeId, TypeCategory,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "m001_entity_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub fully_qualified_name: String,
    pub category: String,
    pub description: Option<String>,
    pub custom_properties_json: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EntityType {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let custom_properties: Vec<CustomProperty> =
            serde_json::from_str(&m.custom_properties_json).unwrap_or_default();

        EntityType {
            id: EntityTypeId(uuid),
            name: m.name,
            display_name: m.display_name,
            fully_qualified_name: m.fully_qualified_name,
            category: TypeCategory::from_str(&m.category).unwrap_or(TypeCategory::Entity),
            description: m.description,
            custom_properties,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn properties_to_json(properties: &[CustomProperty]) -> String {
    serde_json::to_string(properties).unwrap_or_else(|_| "[]".to_string())
}

fn to_active_model(aggregate: &EntityType) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        name: Set(aggregate.name.clone()),
        display_name: Set(aggregate.display_name.clone()),
        fully_qualified_name: Set(aggregate.fully_qualified_name.clone()),
        category: Set(aggregate.category.as_str().to_string()),
        description: Set(aggregate.description.clone()),
        custom_properties_json: Set(properties_to_json(&aggregate.custom_properties)),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    }
}

pub async fn list_all(category: Option<TypeCategory>) -> anyhow::Result<Vec<EntityType>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(category) = category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }
    let items: Vec<EntityType> = query
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<EntityType>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_name(name: &str) -> anyhow::Result<Option<EntityType>> {
    let result = Entity::find()
        .filter(Column::Name.eq(name))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count_all() -> anyhow::Result<u64> {
    use sea_orm::PaginatorTrait;
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &EntityType) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &EntityType) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(custom_properties_json: &str) -> Model {
        Model {
            id: "5f0c4f0a-9a1b-4c9e-8f53-0d6a2b1c3d4e".to_string(),
            name: "table".to_string(),
            display_name: Some("Table".to_string()),
            fully_qualified_name: "metadata.types.table".to_string(),
            category: "entity".to_string(),
            description: Some("A database table".to_string()),
            custom_properties_json: custom_properties_json.to_string(),
            is_deleted: false,
            created_at: None,
            updated_at: None,
            version: 3,
        }
    }

    #[test]
    fn test_model_into_aggregate_parses_property_list() {
        let json = r#"[{
            "name": "owner",
            "propertyType": {
                "id": "11111111-1111-1111-1111-111111111111",
                "name": "string",
                "displayName": "String",
                "kind": "type",
                "fullyQualifiedName": "metadata.types.string"
            },
            "description": "Team owning the table"
        }]"#;

        let aggregate: EntityType = model(json).into();

        assert_eq!(aggregate.name, "table");
        assert_eq!(aggregate.category, TypeCategory::Entity);
        assert_eq!(aggregate.metadata.version, 3);
        assert_eq!(aggregate.custom_properties.len(), 1);
        assert_eq!(aggregate.custom_properties[0].name, "owner");
        assert_eq!(
            aggregate.custom_properties[0].property_type.display_title(),
            "String"
        );
    }

    #[test]
    fn test_model_into_aggregate_tolerates_malformed_property_json() {
        let aggregate: EntityType = model("not json").into();
        assert!(aggregate.custom_properties.is_empty());
    }

    #[test]
    fn test_properties_round_trip_through_json_column() {
        let json = r#"[{"name":"tier","propertyType":{"id":"1","name":"enum","displayName":null,"kind":"type","fullyQualifiedName":null},"description":null}]"#;
        let aggregate: EntityType = model(json).into();
        let serialized = properties_to_json(&aggregate.custom_properties);
        let parsed: Vec<CustomProperty> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, aggregate.custom_properties);
    }
}
