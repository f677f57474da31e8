use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a003_account::{Account, AccountDto, SetAccountParentRequest};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a003_account;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a003_account
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<Account>>> {
    Ok(Json(a003_account::service::list_paginated(query).await?))
}

/// GET /api/a003_account/all
pub async fn list_all() -> ServiceResult<Json<Vec<Account>>> {
    Ok(Json(a003_account::service::list_all().await?))
}

/// GET /api/a003_account/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Account>> {
    let id = parse_id(&id)?;
    Ok(Json(a003_account::service::get_by_id(id).await?))
}

/// POST /api/a003_account
pub async fn upsert(Json(dto): Json<AccountDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a003_account::service::update(dto).await?;
            id
        }
        None => a003_account::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a003_account/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a003_account::service::delete(id).await
}

/// POST /api/a003_account/:id/parent
pub async fn set_parent(
    Path(id): Path<String>,
    Json(req): Json<SetAccountParentRequest>,
) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a003_account::service::set_parent(id, req.parent_ref).await
}
