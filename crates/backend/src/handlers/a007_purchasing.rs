use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a007_purchasing::{Purchasing, PurchasingDto, PurchasingListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a007_purchasing;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a007_purchasing
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<PurchasingListItem>>> {
    Ok(Json(a007_purchasing::service::list_paginated(query).await?))
}

/// GET /api/a007_purchasing/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Purchasing>> {
    let id = parse_id(&id)?;
    Ok(Json(a007_purchasing::service::get_by_id(id).await?))
}

/// POST /api/a007_purchasing
pub async fn upsert(Json(dto): Json<PurchasingDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a007_purchasing::service::update(dto).await?;
            id
        }
        None => a007_purchasing::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a007_purchasing/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a007_purchasing::service::delete(id).await
}

/// POST /api/a007_purchasing/:id/post
pub async fn post(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a007_purchasing::service::post(id).await
}

/// POST /api/a007_purchasing/:id/unpost
pub async fn unpost(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a007_purchasing::service::unpost(id).await
}
