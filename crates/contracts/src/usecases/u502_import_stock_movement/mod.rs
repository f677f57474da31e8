use crate::usecases::common::{RowError, UseCaseMetadata};
use serde::{Deserialize, Serialize};

pub struct ImportStockMovement;

impl UseCaseMetadata for ImportStockMovement {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "import_stock_movement"
    }

    fn display_name() -> &'static str {
        "Import stock movement report"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StockMovementImportResponse {
    /// Documents created
    pub movements: usize,
    /// Lines created
    pub details: usize,
    /// Rows missing a required value
    pub skipped: usize,
    pub errors: Vec<RowError>,
}
