use contracts::domain::m001_entity_type::aggregate::{CustomProperty, EntityType};
use gloo_net::http::Request;

const API_BASE: &str = "/api/metadata/entity-types";

async fn error_body(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        format!("HTTP error: {}", status)
    } else {
        body
    }
}

/// Fetch entity types, optionally filtered by category ("entity" / "field")
pub async fn list_entity_types(category: Option<&str>) -> Result<Vec<EntityType>, String> {
    let url = match category {
        Some(category) => format!("{}?category={}", API_BASE, category),
        None => API_BASE.to_string(),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_body(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single entity type by id
pub async fn get_entity_type(id: &str) -> Result<EntityType, String> {
    let url = format!("{}/{}", API_BASE, id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_body(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Replace the custom-property list of an entity type. Responds with the
/// updated aggregate.
pub async fn update_custom_properties(
    id: &str,
    properties: Vec<CustomProperty>,
) -> Result<EntityType, String> {
    let url = format!("{}/{}/custom-properties", API_BASE, id);

    let response = Request::put(&url)
        .json(&properties)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_body(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
