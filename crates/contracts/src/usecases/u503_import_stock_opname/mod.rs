use crate::usecases::common::{CreatedDocument, UseCaseMetadata};
use serde::{Deserialize, Serialize};

pub struct ImportStockOpname;

impl UseCaseMetadata for ImportStockOpname {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "import_stock_opname"
    }

    fn display_name() -> &'static str {
        "Import stock opname"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpnamePreviewRow {
    pub row: usize,
    pub product_name: String,
    pub product_exists: bool,
    pub system_quantity: f64,
    pub physical_quantity: f64,
    pub difference: f64,
    /// MATCH / OUT x from Gudang / IN x to Gudang (OUT from Kitchen)
    pub movement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OpnamePreviewResponse {
    pub total_rows: usize,
    pub rows: Vec<OpnamePreviewRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OpnameImportResponse {
    pub document: Option<CreatedDocument>,
    /// Product names not found in master data
    pub skipped: Vec<String>,
}
