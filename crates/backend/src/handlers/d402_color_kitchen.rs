use axum::extract::Query;
use axum::Json;
use contracts::dashboards::common::DateRangeQuery;
use contracts::dashboards::d402_color_kitchen::{
    ChemicalUsage, ColorKitchenSummary, KitchenTrendPoint, UsageQuery,
};

use crate::dashboards::d402_color_kitchen::service;
use crate::shared::error::ServiceResult;

/// GET /api/d402_color_kitchen/summary
pub async fn summary(
    Query(range): Query<DateRangeQuery>,
) -> ServiceResult<Json<ColorKitchenSummary>> {
    Ok(Json(service::get_summary(range).await?))
}

/// GET /api/d402_color_kitchen/usage?kind=dye|aux
pub async fn usage(Query(query): Query<UsageQuery>) -> ServiceResult<Json<ChemicalUsage>> {
    Ok(Json(service::get_usage(query).await?))
}

/// GET /api/d402_color_kitchen/trend
pub async fn trend(Query(range): Query<DateRangeQuery>) -> ServiceResult<Json<Vec<KitchenTrendPoint>>> {
    Ok(Json(service::get_trend(range).await?))
}
