use axum::Json;
use contracts::projections::p901_product_avg_cost::ProductAvgCostDto;

use crate::projections::p901_product_avg_cost::service;
use crate::shared::error::ServiceResult;

/// GET /api/p901_product_avg_cost
pub async fn list() -> ServiceResult<Json<Vec<ProductAvgCostDto>>> {
    Ok(Json(service::list().await?))
}

/// POST /api/p901_product_avg_cost/recompute
pub async fn recompute() -> ServiceResult<Json<Vec<ProductAvgCostDto>>> {
    let count = service::recompute().await?;
    tracing::info!("Average cost recomputed for {} products", count);
    Ok(Json(service::list().await?))
}
