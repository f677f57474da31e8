pub mod repository;

use contracts::shared::audit::AuditAction;
use serde::Serialize;

/// Stores before/after snapshots of a changed record. Failures are logged, not returned.
pub async fn record<T: Serialize>(
    table_name: &str,
    record_id: &str,
    action: AuditAction,
    old: Option<&T>,
    new: Option<&T>,
) {
    let old_data = old.and_then(|v| serde_json::to_string(v).ok());
    let new_data = new.and_then(|v| serde_json::to_string(v).ok());
    if let Err(e) = repository::insert(table_name, record_id, action, old_data, new_data).await {
        tracing::warn!(
            "Failed to write audit entry for {} {}: {}",
            table_name,
            record_id,
            e
        );
    }
}
