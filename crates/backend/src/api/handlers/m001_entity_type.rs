use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use contracts::domain::m001_entity_type::aggregate::{CustomProperty, EntityType, TypeCategory};

use crate::domain::m001_entity_type::service::{self, ServiceError};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

fn parse_id(id: &str) -> Result<Uuid, (StatusCode, String)> {
    Uuid::parse_str(id).map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid id: {}", id)))
}

fn map_service_error(e: ServiceError) -> (StatusCode, String) {
    match e {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "entity type not found".to_string()),
        ServiceError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        ServiceError::Internal(e) => {
            tracing::error!("entity type handler failed: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            )
        }
    }
}

/// GET /api/metadata/entity-types?category=entity|field
pub async fn list_all(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntityType>>, (StatusCode, String)> {
    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => Some(TypeCategory::from_str(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown category: {}", raw),
            )
        })?),
    };

    let items = service::list_entity_types(category)
        .await
        .map_err(map_service_error)?;
    Ok(Json(items))
}

/// GET /api/metadata/entity-types/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<EntityType>, (StatusCode, String)> {
    let id = parse_id(&id)?;
    let item = service::get_entity_type(id)
        .await
        .map_err(map_service_error)?;
    Ok(Json(item))
}

/// PUT /api/metadata/entity-types/:id/custom-properties
///
/// Body: the full replacement property list. Responds with the updated
/// aggregate.
pub async fn update_custom_properties(
    Path(id): Path<String>,
    Json(properties): Json<Vec<CustomProperty>>,
) -> Result<Json<EntityType>, (StatusCode, String)> {
    let id = parse_id(&id)?;
    let updated = service::update_custom_properties(id, properties)
        .await
        .map_err(map_service_error)?;
    Ok(Json(updated))
}
