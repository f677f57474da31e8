//! Turns the rows of one purchasing report sheet into staged rows, one per target table.

use contracts::shared::normalize::{normalize_code, normalize_product_name};
use contracts::shared::parse::{number_or_zero, safe_date_string, safe_number};
use contracts::usecases::common::{find_header_row, row_is_blank, ColumnMap};
use contracts::usecases::u501_import_purchasing::{ImportTarget, StagedStatus};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const HEADER_MARKER: &str = "NAMA BARANG";
/// Excel row 7, where the report header normally sits
pub const FALLBACK_HEADER_INDEX: usize = 6;
pub const PREVIEW_LIMIT: usize = 30;

const NOT_A_PRODUCT: [&str; 5] = ["NAT", "NONE", "TOTAL", "JUMLAH", "GRAND TOTAL"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedAccount {
    pub account_no: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedProduct {
    pub name: String,
    pub unit: Option<String>,
    pub account_no: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedSupplier {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParsedPurchasing {
    pub supplier_code: Option<String>,
    pub product_name: String,
    pub qty: f64,
    pub price: f64,
    pub discount: f64,
    pub ppn: f64,
    pub dpp: f64,
    pub pph: f64,
    pub tax_no: Option<String>,
    pub exchange_rate: f64,
    /// YYYY-MM-DD
    pub tanggal: Option<String>,
    pub no_bukti: Option<String>,
    pub no_po: Option<String>,
}

impl ParsedPurchasing {
    /// Rows of the same supplier and No Bukti (or date when there is none) share a header
    pub fn group_key(&self) -> (String, String) {
        let doc = self
            .no_bukti
            .clone()
            .or_else(|| self.tanggal.clone())
            .unwrap_or_default();
        (self.supplier_code.clone().unwrap_or_default(), doc)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedRow {
    pub target: ImportTarget,
    /// 1-based spreadsheet row
    pub row_number: usize,
    pub raw_data: Value,
    pub parsed_data: Value,
    pub status: StagedStatus,
    pub reason: Option<String>,
}

impl StagedRow {
    fn new<T: Serialize>(
        target: ImportTarget,
        row_number: usize,
        raw: &Value,
        parsed: &T,
        missing: &[&str],
        prefix: &str,
    ) -> Self {
        let (status, reason) = if missing.is_empty() {
            (StagedStatus::Valid, None)
        } else {
            (
                StagedStatus::Skipped,
                Some(format!("{}: {}", prefix, missing.join(", "))),
            )
        };
        Self {
            target,
            row_number,
            raw_data: raw.clone(),
            parsed_data: serde_json::to_value(parsed).unwrap_or(Value::Null),
            status,
            reason,
        }
    }
}

/// Result of staging one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct StagedSheet {
    /// 0-based index of the header row
    pub header_index: usize,
    pub rows: Vec<StagedRow>,
}

fn raw_object(columns: &ColumnMap, row: &[String]) -> Value {
    let mut map = Map::new();
    for name in columns.names() {
        if let Some(value) = columns.get(row, &name) {
            map.insert(name, Value::String(value.to_string()));
        }
    }
    Value::Object(map)
}

fn account_no(raw: Option<&str>) -> Option<i64> {
    raw.and_then(safe_number).map(|n| n.trunc() as i64)
}

pub fn stage_sheet(rows: &[Vec<String>]) -> StagedSheet {
    let header_index = find_header_row(rows, HEADER_MARKER).unwrap_or(FALLBACK_HEADER_INDEX);
    let Some(header) = rows.get(header_index) else {
        return StagedSheet {
            header_index,
            rows: Vec::new(),
        };
    };
    let columns = ColumnMap::from_header(header);
    let mut staged = Vec::new();

    for (idx, row) in rows.iter().enumerate().skip(header_index + 1) {
        if row_is_blank(row) {
            continue;
        }
        let row_number = idx + 1;

        let acc_no_raw = columns.get(row, "NO.ACC");
        let acc_name = columns.get(row, "ACCOUNT");
        let product_raw = columns.get(row, "NAMA BARANG");
        let unit = columns.get(row, "SATUAN").map(str::to_uppercase);
        let supplier_code = columns.get(row, "KODE SUPPLIER").map(normalize_code);
        let supplier_name = columns.get(row, "SUPPLIER");

        if acc_no_raw.is_none()
            && acc_name.is_none()
            && product_raw.is_none()
            && supplier_code.is_none()
            && supplier_name.is_none()
        {
            continue;
        }

        let raw = raw_object(&columns, row);
        let acc_no = account_no(acc_no_raw);

        if let (Some(_), Some(name)) = (acc_no_raw, acc_name) {
            let missing: &[&str] = if acc_no.is_none() { &["NO.ACC"] } else { &[] };
            let parsed = ParsedAccount {
                account_no: acc_no,
                name: name.to_string(),
            };
            staged.push(StagedRow::new(
                ImportTarget::Account,
                row_number,
                &raw,
                &parsed,
                missing,
                "missing",
            ));
        }

        let product_name = product_raw.and_then(normalize_product_name);

        if let Some(name) = product_name.as_deref() {
            let mut missing = Vec::new();
            if unit.is_none() {
                missing.push("SATUAN");
            }
            if acc_no.is_none() {
                missing.push("NO.ACC");
            }
            let parsed = ParsedProduct {
                name: name.to_string(),
                unit: unit.clone(),
                account_no: acc_no,
            };
            staged.push(StagedRow::new(
                ImportTarget::Product,
                row_number,
                &raw,
                &parsed,
                &missing,
                "missing",
            ));
        }

        if let (Some(code), Some(name)) = (supplier_code.as_deref(), supplier_name) {
            if !code.is_empty() {
                let parsed = ParsedSupplier {
                    code: code.to_string(),
                    name: name.to_string(),
                };
                staged.push(StagedRow::new(
                    ImportTarget::Supplier,
                    row_number,
                    &raw,
                    &parsed,
                    &[],
                    "missing",
                ));
            }
        }

        let Some(name) = product_name else {
            continue;
        };
        if NOT_A_PRODUCT.contains(&name.as_str()) {
            continue;
        }

        let tanggal = columns.get(row, "TANGGAL").and_then(safe_date_string);
        let no_bukti = columns.get(row, "NO.BUKTI").map(normalize_code);
        let mut missing = Vec::new();
        if supplier_code.is_none() {
            missing.push("KODE SUPPLIER");
        }
        if tanggal.is_none() && no_bukti.is_none() {
            missing.push("TANGGAL/NO.BUKTI");
        }
        let number = |col: &str| columns.get(row, col).map(number_or_zero).unwrap_or(0.0);
        let parsed = ParsedPurchasing {
            supplier_code: supplier_code.clone(),
            product_name: name,
            qty: number("QTY"),
            price: number("HARGA SAT"),
            discount: number("POT."),
            ppn: number("PPN"),
            dpp: number("DPP"),
            pph: number("PPH"),
            tax_no: columns.get(row, "FAKTUR PAJAK").map(str::to_string),
            exchange_rate: number("KURS"),
            tanggal,
            no_bukti,
            no_po: columns.get(row, "NO.PO").map(str::to_string),
        };
        staged.push(StagedRow::new(
            ImportTarget::Purchasing,
            row_number,
            &raw,
            &parsed,
            &missing,
            "missing column(s)",
        ));
    }

    StagedSheet {
        header_index,
        rows: staged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    const HEADER: [&str; 12] = [
        "NO.ACC",
        "ACCOUNT",
        "NAMA BARANG",
        "SATUAN",
        "KODE SUPPLIER",
        "SUPPLIER",
        "QTY",
        "HARGA SAT",
        "NO.BUKTI",
        "TANGGAL",
        "PPN",
        "DPP",
    ];

    fn sheet(data: Vec<Vec<String>>) -> Vec<Vec<String>> {
        let mut rows = vec![row(&["LAPORAN PEMBELIAN"]), row(&[]), row(&HEADER)];
        rows.extend(data);
        rows
    }

    fn targets(staged: &StagedSheet, target: ImportTarget) -> Vec<&StagedRow> {
        staged.rows.iter().filter(|r| r.target == target).collect()
    }

    #[test]
    fn test_full_row_stages_all_targets() {
        let rows = sheet(vec![row(&[
            "1401", "BAHAN KIMIA", "reactive  red", "kg", "s01", "PT WARNA", "10", "5000",
            "NB-1", "01/07/2025", "5500", "50000",
        ])]);
        let staged = stage_sheet(&rows);
        assert_eq!(staged.header_index, 2);
        assert_eq!(staged.rows.len(), 4);
        assert!(staged.rows.iter().all(|r| r.status == StagedStatus::Valid));
        assert!(staged.rows.iter().all(|r| r.row_number == 4));

        let purchasing: ParsedPurchasing =
            serde_json::from_value(targets(&staged, ImportTarget::Purchasing)[0].parsed_data.clone())
                .unwrap();
        assert_eq!(purchasing.product_name, "REACTIVE RED");
        assert_eq!(purchasing.supplier_code.as_deref(), Some("S01"));
        assert_eq!(purchasing.tanggal.as_deref(), Some("2025-07-01"));
        assert_eq!(purchasing.qty, 10.0);
        assert_eq!(purchasing.group_key(), ("S01".to_string(), "NB-1".to_string()));
    }

    #[test]
    fn test_sheetjs_short_dates_are_month_first() {
        let rows = sheet(vec![row(&[
            "1401", "BAHAN KIMIA", "dye z", "KG", "S01", "PT WARNA", "1", "100", "", "7/1/25",
        ])]);
        let staged = stage_sheet(&rows);
        let purchasing: ParsedPurchasing =
            serde_json::from_value(targets(&staged, ImportTarget::Purchasing)[0].parsed_data.clone())
                .unwrap();
        assert_eq!(purchasing.tanggal.as_deref(), Some("2025-07-01"));
        assert_eq!(purchasing.group_key(), ("S01".to_string(), "2025-07-01".to_string()));
    }

    #[test]
    fn test_product_without_unit_and_account_is_skipped() {
        let rows = sheet(vec![row(&["", "", "dye x", "", "S01", "", "1", "1", "NB-2"])]);
        let staged = stage_sheet(&rows);
        let product = targets(&staged, ImportTarget::Product);
        assert_eq!(product[0].status, StagedStatus::Skipped);
        assert_eq!(product[0].reason.as_deref(), Some("missing: SATUAN, NO.ACC"));
        assert!(targets(&staged, ImportTarget::Account).is_empty());
        assert!(targets(&staged, ImportTarget::Supplier).is_empty());
        assert_eq!(
            targets(&staged, ImportTarget::Purchasing)[0].status,
            StagedStatus::Valid
        );
    }

    #[test]
    fn test_purchasing_needs_supplier_and_date_or_number() {
        let rows = sheet(vec![row(&["1401", "BAHAN", "dye y", "KG", "", "", "1", "1"])]);
        let staged = stage_sheet(&rows);
        let purchasing = targets(&staged, ImportTarget::Purchasing);
        assert_eq!(purchasing[0].status, StagedStatus::Skipped);
        assert_eq!(
            purchasing[0].reason.as_deref(),
            Some("missing column(s): KODE SUPPLIER, TANGGAL/NO.BUKTI")
        );
    }

    #[test]
    fn test_total_rows_are_not_purchasing() {
        let rows = sheet(vec![
            row(&["", "", "TOTAL", "", "", "", "100"]),
            row(&["", "", "", "", "", "", "", ""]),
        ]);
        let staged = stage_sheet(&rows);
        assert!(targets(&staged, ImportTarget::Purchasing).is_empty());
        assert_eq!(targets(&staged, ImportTarget::Product).len(), 1);
    }

    #[test]
    fn test_header_falls_back_to_row_seven() {
        let mut rows: Vec<Vec<String>> = (0..6).map(|_| row(&["x"])).collect();
        rows.push(row(&["NO.ACC", "ACCOUNT", "BARANG"]));
        rows.push(row(&["1401", "BAHAN"]));
        let staged = stage_sheet(&rows);
        assert_eq!(staged.header_index, FALLBACK_HEADER_INDEX);
        assert_eq!(staged.rows.len(), 1);
        assert_eq!(staged.rows[0].target, ImportTarget::Account);
        assert_eq!(staged.rows[0].row_number, 8);
    }

    #[test]
    fn test_group_key_uses_date_without_number() {
        let p = ParsedPurchasing {
            supplier_code: Some("S1".into()),
            tanggal: Some("2025-07-02".into()),
            ..Default::default()
        };
        assert_eq!(p.group_key(), ("S1".to_string(), "2025-07-02".to_string()));
    }
}
