use axum::extract::Query;
use axum::Json;
use contracts::shared::logger::{CreateLogRequest, LogEntry, LogQuery};

use crate::shared::error::ServiceResult;
use crate::shared::logger;

const DEFAULT_LIMIT: u64 = 500;

/// GET /api/logs
pub async fn list(Query(query): Query<LogQuery>) -> ServiceResult<Json<Vec<LogEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 5000);
    let logs = logger::repository::get_logs(limit, query.category.as_deref()).await?;
    Ok(Json(logs))
}

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> ServiceResult<()> {
    logger::repository::log_event(&req.source, &req.category, &req.message).await?;
    Ok(())
}

/// DELETE /api/logs
pub async fn clear_all() -> ServiceResult<()> {
    logger::repository::clear_all_logs().await?;
    Ok(())
}
