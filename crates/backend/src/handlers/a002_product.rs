use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a002_product::{Product, ProductDto, ProductListItem};
use contracts::shared::list::{ListQuery, ListResponse, SavedId};

use crate::domain::a002_product;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/a002_product
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> ServiceResult<Json<ListResponse<ProductListItem>>> {
    Ok(Json(a002_product::service::list_paginated(query).await?))
}

/// GET /api/a002_product/all
pub async fn list_all() -> ServiceResult<Json<Vec<Product>>> {
    Ok(Json(a002_product::service::list_all().await?))
}

/// GET /api/a002_product/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Product>> {
    let id = parse_id(&id)?;
    Ok(Json(a002_product::service::get_by_id(id).await?))
}

/// POST /api/a002_product
pub async fn upsert(Json(dto): Json<ProductDto>) -> ServiceResult<Json<SavedId>> {
    let id = match dto.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            a002_product::service::update(dto).await?;
            id
        }
        None => a002_product::service::create(dto).await?.to_string(),
    };
    Ok(Json(SavedId { id }))
}

/// DELETE /api/a002_product/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let id = parse_id(&id)?;
    a002_product::service::delete(id).await
}
