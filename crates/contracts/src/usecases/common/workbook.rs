use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One worksheet as parsed in the browser: every cell formatted as text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Upload body of the staged purchasing import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WorkbookUpload {
    pub file_name: String,
    pub sheets: Vec<SheetData>,
}

/// Body of the single-sheet imports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetRowsRequest {
    pub file_name: String,
    #[serde(default)]
    pub sheet_name: Option<String>,
    pub rows: Vec<Vec<String>>,
    /// YYYY-MM-DD, used by imports that create dated documents
    #[serde(default)]
    pub as_of_date: Option<String>,
}

/// Header cell normalized for lookups: uppercase, single spaces
pub fn normalize_header(cell: &str) -> String {
    cell.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Index of the first row having a cell equal to `marker` (after normalization)
pub fn find_header_row(rows: &[Vec<String>], marker: &str) -> Option<usize> {
    let marker = normalize_header(marker);
    rows.iter()
        .position(|row| row.iter().any(|c| normalize_header(c) == marker))
}

/// Header name → column index, first occurrence wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    columns: HashMap<String, usize>,
}

impl ColumnMap {
    pub fn from_header(header: &[String]) -> Self {
        let mut columns = HashMap::new();
        for (i, cell) in header.iter().enumerate() {
            let key = normalize_header(cell);
            if !key.is_empty() {
                columns.entry(key).or_insert(i);
            }
        }
        Self { columns }
    }

    pub fn has(&self, name: &str) -> bool {
        self.columns.contains_key(&normalize_header(name))
    }

    /// Trimmed cell text, `None` when the column is missing or the cell blank
    pub fn get<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        let idx = *self.columns.get(&normalize_header(name))?;
        row.get(idx)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// Header names present in this map, in column order
    pub fn names(&self) -> Vec<String> {
        let mut v: Vec<_> = self.columns.iter().collect();
        v.sort_by_key(|(_, i)| **i);
        v.into_iter().map(|(k, _)| k.clone()).collect()
    }
}

pub fn row_is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_header_row() {
        let rows = vec![
            row(&["LAPORAN PEMBELIAN"]),
            row(&[]),
            row(&["NO.ACC", "ACCOUNT", " Nama  Barang "]),
        ];
        assert_eq!(find_header_row(&rows, "NAMA BARANG"), Some(2));
        assert_eq!(find_header_row(&rows, "NOBUKTI"), None);
    }

    #[test]
    fn test_column_map_lookup() {
        let map = ColumnMap::from_header(&row(&["NO", "NAMA BARANG", "QTY", "QTY"]));
        let data = row(&["1", "  dye red ", ""]);
        assert!(map.has("nama barang"));
        assert_eq!(map.get(&data, "NAMA BARANG"), Some("dye red"));
        assert_eq!(map.get(&data, "QTY"), None);
        assert_eq!(map.get(&data, "SATUAN"), None);
        assert_eq!(map.names(), vec!["NO", "NAMA BARANG", "QTY"]);
    }
}
