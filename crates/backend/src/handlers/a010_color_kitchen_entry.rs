use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a010_color_kitchen_entry::{ColorKitchenEntry, ColorKitchenEntryDto, ColorKitchenEntryListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a010_color_kitchen_entry;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a010_color_kitchen_entry
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<ColorKitchenEntryListItem>>> {
    Ok(Json(a010_color_kitchen_entry::service::list_paginated(query).await?))
}

/// GET /api/a010_color_kitchen_entry/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<ColorKitchenEntry>> {
    let id = parse_id(&id)?;
    Ok(Json(a010_color_kitchen_entry::service::get_by_id(id).await?))
}

/// POST /api/a010_color_kitchen_entry
pub async fn upsert(Json(dto): Json<ColorKitchenEntryDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a010_color_kitchen_entry::service::update(dto).await?;
            id
        }
        None => a010_color_kitchen_entry::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a010_color_kitchen_entry/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a010_color_kitchen_entry::service::delete(id).await
}

/// POST /api/a010_color_kitchen_entry/:id/post
pub async fn post(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a010_color_kitchen_entry::service::post(id).await
}

/// POST /api/a010_color_kitchen_entry/:id/unpost
pub async fn unpost(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a010_color_kitchen_entry::service::unpost(id).await
}
