//! Reads the GUDANG BESAR count sheet.

use contracts::domain::a011_stock_opname::describe_difference;
use contracts::shared::normalize::normalize_product_name;
use contracts::shared::parse::number_or_zero;
use contracts::usecases::common::{find_header_row, ColumnMap};
use contracts::usecases::u503_import_stock_opname::OpnamePreviewRow;
use std::collections::HashMap;

pub const HEADER_MARKER: &str = "NAMA BARANG";

#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    /// 1-based spreadsheet row
    pub row: usize,
    pub product_name: String,
    /// SALDO AWAL + MUTASI MASUK - MUTASI KELUAR
    pub system_quantity: f64,
    /// FISIK
    pub physical_quantity: f64,
}

impl CountRow {
    pub fn difference(&self) -> f64 {
        self.system_quantity - self.physical_quantity
    }

    pub fn to_preview(&self, product_exists: bool) -> OpnamePreviewRow {
        OpnamePreviewRow {
            row: self.row,
            product_name: self.product_name.clone(),
            product_exists,
            system_quantity: self.system_quantity,
            physical_quantity: self.physical_quantity,
            difference: self.difference(),
            movement: describe_difference(self.difference()),
        }
    }
}

/// Rows with a NO and a product name; totals and notes below the table have no NO
pub fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<CountRow>, String> {
    let header_index = find_header_row(rows, HEADER_MARKER)
        .ok_or_else(|| format!("Header row with {} not found", HEADER_MARKER))?;
    let columns = ColumnMap::from_header(&rows[header_index]);
    let cell = |row: &[String], name: &str| columns.get(row, name).map(number_or_zero).unwrap_or(0.0);

    Ok(rows
        .iter()
        .enumerate()
        .skip(header_index + 1)
        .filter(|(_, row)| columns.get(row, "NO").is_some())
        .filter_map(|(i, row)| {
            let product_name = columns.get(row, "NAMA BARANG").and_then(normalize_product_name)?;
            Some(CountRow {
                row: i + 1,
                product_name,
                system_quantity: cell(row, "SALDO AWAL") + cell(row, "MUTASI MASUK")
                    - cell(row, "MUTASI KELUAR"),
                physical_quantity: cell(row, "FISIK"),
            })
        })
        .collect())
}

pub fn preview_rows(
    rows: &[CountRow],
    products: &HashMap<String, String>,
    limit: usize,
) -> Vec<OpnamePreviewRow> {
    rows.iter()
        .take(limit)
        .map(|r| r.to_preview(products.contains_key(&r.product_name)))
        .collect()
}

/// Document code of an opname dated `date` (YYYY-MM-DD)
pub fn opname_code(date: &str) -> String {
    format!("SO-{}", date.replace('-', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn sheet() -> Vec<Vec<String>> {
        vec![
            row(&["GUDANG BESAR"]),
            row(&[
                "NO",
                "NAMA BARANG",
                "SALDO AWAL",
                "MUTASI MASUK",
                "MUTASI KELUAR",
                "FISIK",
            ]),
            row(&["1", "dye red", "10", "5", "3", "12"]),
            row(&["2", "dye blue", "10", "", "", "8"]),
            row(&["3", "dye black", "1", "0", "0", "4"]),
            row(&["", "TOTAL", "21", "5", "3", "24"]),
        ]
    }

    #[test]
    fn test_parse_rows_computes_system_quantity() {
        let rows = parse_rows(&sheet()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row, 3);
        assert_eq!(rows[0].product_name, "DYE RED");
        assert_eq!(rows[0].system_quantity, 12.0);
        assert_eq!(rows[0].difference(), 0.0);
        assert_eq!(rows[1].difference(), 2.0);
        assert_eq!(rows[2].difference(), -3.0);
    }

    #[test]
    fn test_preview_rows_describe_movement() {
        let rows = parse_rows(&sheet()).unwrap();
        let products: HashMap<String, String> =
            [("DYE RED".to_string(), "p1".to_string())].into_iter().collect();
        let preview = preview_rows(&rows, &products, 50);
        assert_eq!(preview[0].movement, "MATCH");
        assert!(preview[0].product_exists);
        assert_eq!(preview[1].movement, "OUT 2 from Gudang");
        assert!(!preview[1].product_exists);
        assert_eq!(preview[2].movement, "IN 3 to Gudang (OUT from Kitchen)");
        assert_eq!(preview_rows(&rows, &products, 2).len(), 2);
    }

    #[test]
    fn test_opname_code() {
        assert_eq!(opname_code("2025-07-31"), "SO-20250731");
    }
}
