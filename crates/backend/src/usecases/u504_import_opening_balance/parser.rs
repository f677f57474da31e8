//! Reads the opening balance sheet and prices its lines.

use contracts::shared::normalize::normalize_product_name;
use contracts::shared::parse::{number_or_zero, safe_number};
use contracts::usecases::common::{find_header_row, ColumnMap, RowError};

pub const HEADER_MARKER: &str = "NAMA BARANG";
pub const SYSTEM_SUPPLIER_CODE: &str = "SYSTEM";
pub const SYSTEM_SUPPLIER_NAME: &str = "System Opening Balance";
pub const PURCHASE_ORDER: &str = "OPENBAL";
const PPN_RATE: f64 = 0.11;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRow {
    pub row: usize,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
    pub dpp: f64,
    pub ppn: f64,
}

/// (price, dpp, ppn) of an opening line. A value including PPN is split
/// into base and tax; otherwise the physical value is taken as tax free.
pub fn price_line(quantity: f64, total_with_ppn: Option<f64>, physical_value: f64) -> (f64, f64, f64) {
    let (dpp, ppn) = match total_with_ppn {
        Some(total) => {
            let dpp = total / (1.0 + PPN_RATE);
            (dpp, dpp * PPN_RATE)
        }
        None => (physical_value, 0.0),
    };
    let price = if quantity != 0.0 { dpp / quantity } else { 0.0 };
    (price, dpp, ppn)
}

#[derive(Debug, Default)]
pub struct ParsedBalance {
    pub rows: Vec<BalanceRow>,
    pub errors: Vec<RowError>,
}

/// Lines are priced as `dpp / quantity`, so a row without an opening
/// quantity cannot carry its value into a purchasing line. Such rows are
/// reported instead of being booked at zero.
pub fn parse_rows(rows: &[Vec<String>]) -> Result<ParsedBalance, String> {
    let header_index = find_header_row(rows, HEADER_MARKER)
        .ok_or_else(|| format!("Header row with {} not found", HEADER_MARKER))?;
    let columns = ColumnMap::from_header(&rows[header_index]);

    let mut parsed = ParsedBalance::default();
    for (i, row) in rows.iter().enumerate().skip(header_index + 1) {
        if columns.get(row, "NO").is_none() {
            continue;
        }
        let Some(product_name) = columns.get(row, "NAMA BARANG").and_then(normalize_product_name) else {
            continue;
        };
        let quantity = columns.get(row, "SALDO AWAL").map(number_or_zero).unwrap_or(0.0);
        let total_with_ppn = columns
            .get(row, "JUMLAH SALDO AWAL + PPN")
            .and_then(safe_number);
        let physical_value = columns.get(row, "JUMLAH FISIK").map(number_or_zero).unwrap_or(0.0);
        let (price, dpp, ppn) = price_line(quantity, total_with_ppn, physical_value);

        if quantity == 0.0 {
            if dpp != 0.0 {
                parsed.errors.push(RowError::new(
                    i + 1,
                    format!("{}: value {:.2} without SALDO AWAL quantity", product_name, dpp + ppn),
                ));
            }
            continue;
        }

        parsed.rows.push(BalanceRow {
            row: i + 1,
            product_name,
            quantity,
            price,
            dpp,
            ppn,
        });
    }
    Ok(parsed)
}

pub fn opening_code(date: &str) -> String {
    format!("OPENBAL-{}", date.replace('-', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_price_line_splits_ppn() {
        let (price, dpp, ppn) = price_line(10.0, Some(1110.0), 0.0);
        assert!((dpp - 1000.0).abs() < 1e-9);
        assert!((ppn - 110.0).abs() < 1e-9);
        assert!((price - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_line_physical_value_and_zero_quantity() {
        assert_eq!(price_line(4.0, None, 200.0), (50.0, 200.0, 0.0));
        assert_eq!(price_line(0.0, None, 200.0), (0.0, 200.0, 0.0));
    }

    #[test]
    fn test_parse_rows() {
        let rows = vec![
            row(&["SALDO AWAL GUDANG"]),
            row(&[
                "NO",
                "NAMA BARANG",
                "SALDO AWAL",
                "JUMLAH SALDO AWAL + PPN",
                "JUMLAH FISIK",
            ]),
            row(&["1", "dye red", "10", "1110", ""]),
            row(&["2", "dye blue", "4", "", "200"]),
            row(&["", "JUMLAH", "14", "1110", "200"]),
        ];
        let parsed = parse_rows(&rows).unwrap().rows;
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].product_name, "DYE RED");
        assert!((parsed[0].dpp - 1000.0).abs() < 1e-9);
        assert_eq!(parsed[1].row, 4);
        assert_eq!(parsed[1].price, 50.0);
        assert_eq!(parsed[1].ppn, 0.0);
    }

    #[test]
    fn test_zero_quantity_with_value_is_reported() {
        let rows = vec![
            row(&["NO", "NAMA BARANG", "SALDO AWAL", "JUMLAH SALDO AWAL + PPN", "JUMLAH FISIK"]),
            row(&["1", "dye red", "0", "", "500"]),
            row(&["2", "dye blue", "0", "", ""]),
            row(&["3", "dye green", "5", "", "100"]),
        ];
        let parsed = parse_rows(&rows).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].product_name, "DYE GREEN");
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].row, 2);
        assert!(parsed.errors[0].reason.starts_with("DYE RED: value 500.00"));
    }

    #[test]
    fn test_opening_code() {
        assert_eq!(opening_code("2025-07-31"), "OPENBAL-20250731");
    }
}
