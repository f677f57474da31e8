use serde::{de::DeserializeOwned, Serialize};

/// Deserializes a `lines_json` column; malformed or missing JSON yields no lines.
pub fn parse_lines<T: DeserializeOwned>(lines_json: Option<&str>) -> Vec<T> {
    lines_json
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Serializes lines for storage; an empty table is stored as NULL.
pub fn lines_to_json<T: Serialize>(lines: &[T]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        serde_json::to_string(lines).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_tolerates_garbage() {
        let lines: Vec<f64> = parse_lines(Some("not json"));
        assert!(lines.is_empty());
        let lines: Vec<f64> = parse_lines(None);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_empty_lines_stored_as_null() {
        let empty: Vec<f64> = vec![];
        assert_eq!(lines_to_json(&empty), None);
        assert_eq!(lines_to_json(&[1.5]).as_deref(), Some("[1.5]"));
    }
}
