use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a008_stock_movement::{StockMovement, StockMovementDto, StockMovementListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a008_stock_movement;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a008_stock_movement
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<StockMovementListItem>>> {
    Ok(Json(a008_stock_movement::service::list_paginated(query).await?))
}

/// GET /api/a008_stock_movement/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<StockMovement>> {
    let id = parse_id(&id)?;
    Ok(Json(a008_stock_movement::service::get_by_id(id).await?))
}

/// POST /api/a008_stock_movement
pub async fn upsert(Json(dto): Json<StockMovementDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a008_stock_movement::service::update(dto).await?;
            id
        }
        None => a008_stock_movement::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a008_stock_movement/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a008_stock_movement::service::delete(id).await
}

/// POST /api/a008_stock_movement/:id/post
pub async fn post(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a008_stock_movement::service::post(id).await
}

/// POST /api/a008_stock_movement/:id/unpost
pub async fn unpost(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a008_stock_movement::service::unpost(id).await
}
