use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a011_stock_opname::{StockOpname, StockOpnameDto, StockOpnameListItem, SystemQuantity, SystemQuantityQuery};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a011_stock_opname;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a011_stock_opname
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<StockOpnameListItem>>> {
    Ok(Json(a011_stock_opname::service::list_paginated(query).await?))
}

/// GET /api/a011_stock_opname/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<StockOpname>> {
    let id = parse_id(&id)?;
    Ok(Json(a011_stock_opname::service::get_by_id(id).await?))
}

/// POST /api/a011_stock_opname
pub async fn upsert(Json(dto): Json<StockOpnameDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a011_stock_opname::service::update(dto).await?;
            id
        }
        None => a011_stock_opname::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a011_stock_opname/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a011_stock_opname::service::delete(id).await
}

/// POST /api/a011_stock_opname/:id/post
pub async fn post(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a011_stock_opname::service::post(id).await
}

/// POST /api/a011_stock_opname/:id/unpost
pub async fn unpost(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a011_stock_opname::service::unpost(id).await
}

/// GET /api/a011_stock_opname/system_quantity/:product_ref
pub async fn system_quantity(
    Path(product_ref): Path<String>,
    Query(query): Query<SystemQuantityQuery>,
) -> ServiceResult<Json<SystemQuantity>> {
    Ok(Json(
        a011_stock_opname::service::system_quantity(&product_ref, query.date).await?,
    ))
}
