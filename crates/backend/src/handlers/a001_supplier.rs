use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a001_supplier::{Supplier, SupplierDto};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a001_supplier;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a001_supplier
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<Supplier>>> {
    Ok(Json(a001_supplier::service::list_paginated(query).await?))
}

/// GET /api/a001_supplier/all
pub async fn list_all() -> ServiceResult<Json<Vec<Supplier>>> {
    Ok(Json(a001_supplier::service::list_all().await?))
}

/// GET /api/a001_supplier/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Supplier>> {
    let id = parse_id(&id)?;
    Ok(Json(a001_supplier::service::get_by_id(id).await?))
}

/// POST /api/a001_supplier
pub async fn upsert(Json(dto): Json<SupplierDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a001_supplier::service::update(dto).await?;
            id
        }
        None => a001_supplier::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a001_supplier/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a001_supplier::service::delete(id).await
}
