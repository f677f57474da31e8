pub mod repository;

use repository::log_event_internal;

/// Writes a server-side entry to the application log without waiting for it
///
/// ```ignore
/// logger::log("startup", "Server started");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
