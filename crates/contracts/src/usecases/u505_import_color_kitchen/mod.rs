use crate::usecases::common::{RowError, SheetRowsRequest, UseCaseMetadata};
use serde::{Deserialize, Serialize};

pub struct ImportColorKitchen;

impl UseCaseMetadata for ImportColorKitchen {
    fn usecase_index() -> &'static str {
        "u505"
    }

    fn usecase_name() -> &'static str {
        "import_color_kitchen"
    }

    fn display_name() -> &'static str {
        "Import color kitchen report"
    }
}

/// Worksheet holding the kitchen report
pub const SHEET_NAME: &str = "TEMPLATE QTY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ColorKitchenImportRequest {
    #[serde(flatten)]
    pub sheet: SheetRowsRequest,
    /// Create unknown products and designs instead of rejecting the file
    #[serde(default)]
    pub create_missing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ColorKitchenImportResponse {
    pub batches: usize,
    pub entries: usize,
    /// Separator rows between batches
    pub skipped: usize,
    #[serde(default)]
    pub created_products: Vec<String>,
    #[serde(default)]
    pub created_designs: Vec<String>,
    pub errors: Vec<RowError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_reads_flat_body() {
        let body = r#"{"file_name":"ck.xlsx","rows":[["OPJ"]],"create_missing":true}"#;
        let request: ColorKitchenImportRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.sheet.file_name, "ck.xlsx");
        assert_eq!(request.sheet.rows, vec![vec!["OPJ".to_string()]]);
        assert!(request.create_missing);
        assert_eq!(request.sheet.as_of_date, None);
    }
}
