use serde::{Deserialize, Serialize};

/// Problem with a single spreadsheet row; the import goes on without it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowError {
    /// 1-based spreadsheet row
    pub row: usize,
    pub reason: String,
}

impl RowError {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

/// Document created by an import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreatedDocument {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub lines: usize,
}
