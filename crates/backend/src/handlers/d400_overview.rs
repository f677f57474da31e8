use axum::extract::Query;
use axum::Json;
use contracts::dashboards::common::DateRangeQuery;
use contracts::dashboards::d400_overview::OverviewResponse;

use crate::dashboards::d400_overview::service;
use crate::shared::error::ServiceResult;

/// GET /api/d400_overview?start_date&end_date
pub async fn get_overview(
    Query(range): Query<DateRangeQuery>,
) -> ServiceResult<Json<OverviewResponse>> {
    Ok(Json(service::get_overview(range).await?))
}
