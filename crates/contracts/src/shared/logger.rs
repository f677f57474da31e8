use serde::{Deserialize, Serialize};

/// Row of the application log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// "client" or "server"
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogQuery {
    /// Newest entries returned, 500 when omitted
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
}
