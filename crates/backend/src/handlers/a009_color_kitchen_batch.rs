use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a009_color_kitchen_batch::{ColorKitchenBatch, ColorKitchenBatchDto, ColorKitchenBatchListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a009_color_kitchen_batch;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a009_color_kitchen_batch
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<ColorKitchenBatchListItem>>> {
    Ok(Json(a009_color_kitchen_batch::service::list_paginated(query).await?))
}

/// GET /api/a009_color_kitchen_batch/all
pub async fn list_all() -> ServiceResult<Json<Vec<ColorKitchenBatch>>> {
    Ok(Json(a009_color_kitchen_batch::service::list_all().await?))
}

/// GET /api/a009_color_kitchen_batch/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<ColorKitchenBatch>> {
    let id = parse_id(&id)?;
    Ok(Json(a009_color_kitchen_batch::service::get_by_id(id).await?))
}

/// POST /api/a009_color_kitchen_batch
pub async fn upsert(Json(dto): Json<ColorKitchenBatchDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a009_color_kitchen_batch::service::update(dto).await?;
            id
        }
        None => a009_color_kitchen_batch::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a009_color_kitchen_batch/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a009_color_kitchen_batch::service::delete(id).await
}

/// POST /api/a009_color_kitchen_batch/:id/post
pub async fn post(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a009_color_kitchen_batch::service::post(id).await
}

/// POST /api/a009_color_kitchen_batch/:id/unpost
pub async fn unpost(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a009_color_kitchen_batch::service::unpost(id).await
}
