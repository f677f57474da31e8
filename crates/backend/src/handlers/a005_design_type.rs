use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a005_design_type::{DesignType, DesignTypeDto};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a005_design_type;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a005_design_type
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<DesignType>>> {
    Ok(Json(a005_design_type::service::list_paginated(query).await?))
}

/// GET /api/a005_design_type/all
pub async fn list_all() -> ServiceResult<Json<Vec<DesignType>>> {
    Ok(Json(a005_design_type::service::list_all().await?))
}

/// GET /api/a005_design_type/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<DesignType>> {
    let id = parse_id(&id)?;
    Ok(Json(a005_design_type::service::get_by_id(id).await?))
}

/// POST /api/a005_design_type
pub async fn upsert(Json(dto): Json<DesignTypeDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a005_design_type::service::update(dto).await?;
            id
        }
        None => a005_design_type::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a005_design_type/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a005_design_type::service::delete(id).await
}
