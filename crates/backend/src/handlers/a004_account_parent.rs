use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a004_account_parent::{AccountParent, AccountParentDto, CategorizationBoard};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a004_account_parent;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a004_account_parent
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<AccountParent>>> {
    Ok(Json(a004_account_parent::service::list_paginated(query).await?))
}

/// GET /api/a004_account_parent/all
pub async fn list_all() -> ServiceResult<Json<Vec<AccountParent>>> {
    Ok(Json(a004_account_parent::service::list_all().await?))
}

/// GET /api/a004_account_parent/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<AccountParent>> {
    let id = parse_id(&id)?;
    Ok(Json(a004_account_parent::service::get_by_id(id).await?))
}

/// POST /api/a004_account_parent
pub async fn upsert(Json(dto): Json<AccountParentDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a004_account_parent::service::update(dto).await?;
            id
        }
        None => a004_account_parent::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a004_account_parent/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a004_account_parent::service::delete(id).await
}

/// GET /api/a004_account_parent/board
pub async fn board() -> ServiceResult<Json<CategorizationBoard>> {
    Ok(Json(a004_account_parent::service::get_board().await?))
}
