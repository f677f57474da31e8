use axum::extract::Query;
use axum::Json;
use contracts::shared::audit::{AuditEntry, AuditQuery};
use contracts::shared::list::ListResponse;

use crate::shared::audit;
use crate::shared::error::ServiceResult;

/// GET /api/audit_log?table_name&record_id&page&page_size
pub async fn list(Query(query): Query<AuditQuery>) -> ServiceResult<Json<ListResponse<AuditEntry>>> {
    Ok(Json(audit::repository::list(&query).await?))
}
