use crate::shared::api_utils::{delete, get_json, query_string, with_query};
use contracts::shared::logger::LogEntry;

const API_BASE: &str = "/api/logs";

pub fn list_path(limit: u64, category: &str) -> String {
    with_query(
        API_BASE,
        &query_string(&[
            ("limit", Some(limit.to_string())),
            ("category", Some(category.to_string())),
        ]),
    )
}

pub async fn fetch_logs(limit: u64, category: &str) -> Result<Vec<LogEntry>, String> {
    get_json(&list_path(limit, category)).await
}

pub async fn clear_logs() -> Result<(), String> {
    delete(API_BASE).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_skips_blank_category() {
        assert_eq!(list_path(100, "  "), "/api/logs?limit=100");
        assert_eq!(list_path(50, "import"), "/api/logs?limit=50&category=import");
    }
}
