use super::request::{ImportTarget, StagedStatus};
use crate::shared::list::PageMeta;
use serde::{Deserialize, Serialize};

/// Row of the `temp_import` staging table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagedRowDto {
    pub id: String,
    pub session_id: String,
    pub sheet_name: String,
    pub table_target: ImportTarget,
    pub row_number: usize,
    /// Header → cell text
    pub raw_data: serde_json::Value,
    pub parsed_data: serde_json::Value,
    pub status: StagedStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetStageResult {
    pub sheet_name: String,
    /// 1-based row of the detected header
    pub header_row: usize,
    pub valid_rows: usize,
    pub skipped_rows: usize,
    pub preview_rows: Vec<StagedRowDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub session_id: String,
    pub file_name: String,
    pub sheets: Vec<SheetStageResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetSummary {
    pub target: ImportTarget,
    pub valid: u64,
    pub skipped: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewSummary {
    pub session_id: String,
    pub targets: Vec<TargetSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewPage {
    pub target: ImportTarget,
    pub items: Vec<StagedRowDto>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommitCounts {
    pub accounts: usize,
    pub suppliers: usize,
    pub products: usize,
    pub purchasing_headers: usize,
    pub purchasing_lines: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitResponse {
    pub session_id: String,
    pub summary: Vec<TargetSummary>,
    pub inserted: CommitCounts,
    /// Rows that could not be committed, e.g. product whose account is unknown
    pub warnings: Vec<String>,
}
