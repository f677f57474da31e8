//! Forwards client-side failures to the application log (`POST /api/logs`).

use crate::shared::api_utils::post_unit;
use contracts::shared::logger::CreateLogRequest;
use wasm_bindgen_futures::spawn_local;

/// Logs to the console and, without waiting, to the server log
pub fn report_error(category: &'static str, message: impl Into<String>) {
    let message = message.into();
    log::error!("[{}] {}", category, message);
    spawn_local(async move {
        let body = CreateLogRequest {
            source: "client".to_string(),
            category: category.to_string(),
            message,
        };
        if let Err(e) = post_unit("/api/logs", &body).await {
            log::warn!("failed to forward log entry: {}", e);
        }
    });
}
