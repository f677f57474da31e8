use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_overview::OverviewResponse;

pub const API_BASE: &str = "/api/d400_overview";

/// `path` already carries the date range query
pub async fn get_overview(path: &str) -> Result<OverviewResponse, String> {
    get_json(path).await
}
