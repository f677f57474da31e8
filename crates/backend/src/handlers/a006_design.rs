use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a006_design::{Design, DesignDto, DesignListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a006_design;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a006_design
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<DesignListItem>>> {
    Ok(Json(a006_design::service::list_paginated(query).await?))
}

/// GET /api/a006_design/all
pub async fn list_all() -> ServiceResult<Json<Vec<Design>>> {
    Ok(Json(a006_design::service::list_all().await?))
}

/// GET /api/a006_design/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Design>> {
    let id = parse_id(&id)?;
    Ok(Json(a006_design::service::get_by_id(id).await?))
}

/// POST /api/a006_design
pub async fn upsert(Json(dto): Json<DesignDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a006_design::service::update(dto).await?;
            id
        }
        None => a006_design::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a006_design/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a006_design::service::delete(id).await
}
