use crate::usecases::common::{CreatedDocument, RowError, UseCaseMetadata};
use serde::{Deserialize, Serialize};

pub struct ImportOpeningBalance;

impl UseCaseMetadata for ImportOpeningBalance {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "import_opening_balance"
    }

    fn display_name() -> &'static str {
        "Import opening balance"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OpeningBalanceResponse {
    pub document: Option<CreatedDocument>,
    pub total_value: f64,
    pub skipped: Vec<String>,
    /// Rows left out, e.g. a value without an opening quantity
    #[serde(default)]
    pub errors: Vec<RowError>,
}
