//! Reads the CHEMICAL sheet of the stock movement report.

use contracts::domain::a008_stock_movement::StockMovementLine;
use contracts::shared::normalize::{normalize_code, normalize_product_name};
use contracts::shared::parse::{safe_date_string, safe_number};
use contracts::usecases::common::{find_header_row, row_is_blank, ColumnMap, RowError};
use std::collections::HashMap;

pub const HEADER_MARKER: &str = "NOBUKTI";

#[derive(Debug, Clone, PartialEq)]
pub struct MovementRow {
    /// 1-based spreadsheet row
    pub row: usize,
    pub code: String,
    /// YYYY-MM-DD
    pub date: String,
    pub quantity: f64,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSheet {
    pub rows: Vec<MovementRow>,
    /// Rows missing NOBUKTI, TANGGAL, QTY or NAMABRG
    pub skipped: usize,
}

pub fn parse_rows(rows: &[Vec<String>]) -> Result<ParsedSheet, String> {
    let header_index = find_header_row(rows, HEADER_MARKER)
        .ok_or_else(|| format!("Header row with {} not found", HEADER_MARKER))?;
    let columns = ColumnMap::from_header(&rows[header_index]);

    let mut parsed = ParsedSheet::default();
    for (i, row) in rows.iter().enumerate().skip(header_index + 1) {
        if row_is_blank(row) {
            continue;
        }
        let code = columns.get(row, "NOBUKTI").map(normalize_code);
        let date = columns.get(row, "TANGGAL").and_then(safe_date_string);
        let quantity = columns.get(row, "QTY").and_then(safe_number);
        let product_name = columns.get(row, "NAMABRG").and_then(normalize_product_name);

        match (code, date, quantity, product_name) {
            (Some(code), Some(date), Some(quantity), Some(product_name)) if !code.is_empty() => {
                parsed.rows.push(MovementRow {
                    row: i + 1,
                    code,
                    date,
                    quantity,
                    product_name,
                })
            }
            _ => parsed.skipped += 1,
        }
    }
    Ok(parsed)
}

/// Lines of one movement document
#[derive(Debug, Clone, PartialEq)]
pub struct MovementGroup {
    pub code: String,
    pub date: String,
    /// Spreadsheet row of the first line
    pub first_row: usize,
    pub lines: Vec<StockMovementLine>,
}

/// Groups rows into documents by (code, date), in order of first appearance.
/// `products` maps normalized product names to ids.
pub fn group_movements(
    rows: &[MovementRow],
    products: &HashMap<String, String>,
) -> (Vec<MovementGroup>, Vec<RowError>) {
    let mut groups: Vec<MovementGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut errors = Vec::new();

    for r in rows {
        let Some(product_ref) = products.get(&r.product_name) else {
            errors.push(RowError::new(
                r.row,
                format!("product not found: {}", r.product_name),
            ));
            continue;
        };
        let key = (r.code.clone(), r.date.clone());
        let pos = *index.entry(key).or_insert_with(|| {
            groups.push(MovementGroup {
                code: r.code.clone(),
                date: r.date.clone(),
                first_row: r.row,
                lines: Vec::new(),
            });
            groups.len() - 1
        });
        groups[pos].lines.push(StockMovementLine {
            product_ref: product_ref.clone(),
            quantity: r.quantity,
            unit_cost_used: 0.0,
        });
    }
    (groups, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn sheet() -> Vec<Vec<String>> {
        vec![
            row(&["LAPORAN CHEMICAL"]),
            row(&[]),
            row(&["NOBUKTI", "TANGGAL", "NAMABRG", "QTY"]),
            row(&["bk-01", "2025-08-01", "dye red", "10"]),
            row(&["BK-01", "2025-08-01", "Dye  Blue", "2,5"]),
            row(&["BK-02", "2025-08-02", "dye red", "4"]),
            row(&["BK-03", "", "dye red", "4"]),
            row(&["", "", "", ""]),
            row(&["BK-04", "2025-08-03", "unknown", "1"]),
        ]
    }

    #[test]
    fn test_parse_rows_skips_incomplete() {
        let parsed = parse_rows(&sheet()).unwrap();
        assert_eq!(parsed.rows.len(), 4);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.rows[0].row, 4);
        assert_eq!(parsed.rows[0].code, "BK-01");
        assert_eq!(parsed.rows[1].product_name, "DYE BLUE");
        assert_eq!(parsed.rows[1].quantity, 2.5);
    }

    #[test]
    fn test_parse_rows_requires_header() {
        assert!(parse_rows(&[row(&["NO", "NAMA"])]).is_err());
    }

    #[test]
    fn test_group_movements_by_code_and_date() {
        let parsed = parse_rows(&sheet()).unwrap();
        let products: HashMap<String, String> = [
            ("DYE RED".to_string(), "p1".to_string()),
            ("DYE BLUE".to_string(), "p2".to_string()),
        ]
        .into_iter()
        .collect();

        let (groups, errors) = group_movements(&parsed.rows, &products);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].code, "BK-01");
        assert_eq!(groups[0].lines.len(), 2);
        assert_eq!(groups[1].lines[0].product_ref, "p1");
        assert_eq!(errors, vec![RowError::new(9, "product not found: UNKNOWN")]);
    }
}
