//! Reads the TEMPLATE QTY sheet of the color kitchen report.
//!
//! The header spans three rows: section, sub group and product name. A
//! section caption is written once over its columns, so blank section cells
//! continue the section to their left. The first five columns describe the
//! print order (OPJ, DESIGN, JENIS KAIN, ROLL, TGL). Dyestuff columns add up
//! per batch, AUXILIARIES columns belong to the entry of their row. A row
//! without OPJ and DESIGN closes the current batch.

use contracts::shared::normalize::{normalize_code, normalize_product_name};
use contracts::shared::parse::{number_or_zero, safe_date_string, safe_number};
use contracts::usecases::common::{normalize_header, row_is_blank};

pub const HEADER_MARKER: &str = "OPJ";
/// Columns A:BI
const MAX_COLUMNS: usize = 61;
const ENTRY_COLUMNS: usize = 5;
const AUXILIARIES: &str = "AUXILIARIES";
const PASTE: &str = "JUMLAH PASTA";
/// Screen mesh captions under the product names
const NOT_A_PRODUCT: [&str; 4] = ["0.4", "0.5", "0.6", "0.65"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Dyestuff,
    Auxiliary,
    /// Paste made for the entry, not a product
    Paste,
}

/// Cells summed into one product, in sheet order
#[derive(Debug, Clone, PartialEq)]
pub struct ProductColumns {
    pub product_name: String,
    pub role: ColumnRole,
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryRow {
    /// 1-based spreadsheet row
    pub row: usize,
    /// OPJ number
    pub code: String,
    /// YYYY-MM-DD
    pub date: Option<String>,
    pub design: String,
    /// JENIS KAIN, the design type
    pub fabric: String,
    pub rolls: f64,
    pub paste_quantity: f64,
    pub auxiliaries: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchGroup {
    pub first_row: usize,
    pub opj: String,
    pub date: Option<String>,
    pub dyes: Vec<(String, f64)>,
    pub entries: Vec<EntryRow>,
}

impl BatchGroup {
    /// `BATCH-<first OPJ>-<date>`; `fallback_date` stands in for a missing TGL
    pub fn code(&self, fallback_date: &str) -> String {
        format!(
            "BATCH-{}-{}",
            self.opj,
            self.date.as_deref().unwrap_or(fallback_date)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedReport {
    pub batches: Vec<BatchGroup>,
    /// Separator rows with values but no OPJ and DESIGN
    pub skipped: usize,
}

fn cell(rows: &[Vec<String>], row: usize, col: usize) -> &str {
    rows.get(row)
        .and_then(|r| r.get(col))
        .map(|s| s.trim())
        .unwrap_or("")
}

fn add_quantity(lines: &mut Vec<(String, f64)>, product_name: &str, quantity: f64) {
    match lines.iter_mut().find(|(name, _)| name == product_name) {
        Some((_, total)) => *total += quantity,
        None => lines.push((product_name.to_string(), quantity)),
    }
}

/// Product columns described by the three header rows starting at `section_row`
pub fn product_columns(rows: &[Vec<String>], section_row: usize) -> Vec<ProductColumns> {
    let width = rows
        .iter()
        .skip(section_row)
        .take(3)
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMNS);

    let mut section = String::new();
    let mut columns: Vec<ProductColumns> = Vec::new();
    for col in 0..width {
        let caption = cell(rows, section_row, col);
        if !caption.is_empty() {
            section = caption.to_string();
        }
        if col < ENTRY_COLUMNS {
            continue;
        }
        let sub = cell(rows, section_row + 1, col);
        let name = cell(rows, section_row + 2, col);
        let label = [name, sub, section.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("");
        let Some(product_name) = normalize_product_name(label) else {
            continue;
        };
        if NOT_A_PRODUCT.contains(&product_name.as_str()) {
            continue;
        }

        let role = if section.to_uppercase().contains(AUXILIARIES) {
            let is_paste = [name, sub]
                .into_iter()
                .any(|s| normalize_product_name(s).as_deref() == Some(PASTE));
            if is_paste {
                ColumnRole::Paste
            } else {
                ColumnRole::Auxiliary
            }
        } else {
            ColumnRole::Dyestuff
        };

        match columns.iter_mut().find(|c| c.product_name == product_name) {
            Some(existing) => existing.indices.push(col),
            None => columns.push(ProductColumns {
                product_name,
                role,
                indices: vec![col],
            }),
        }
    }
    columns
}

pub fn parse_report(rows: &[Vec<String>]) -> Result<ParsedReport, String> {
    let section_row = rows
        .iter()
        .position(|r| r.first().map(|c| normalize_header(c)).as_deref() == Some(HEADER_MARKER))
        .ok_or_else(|| format!("Header row starting with {} not found", HEADER_MARKER))?;
    let columns = product_columns(rows, section_row);
    if columns.is_empty() {
        return Err("No product columns found under the header".into());
    }

    let mut report = ParsedReport::default();
    let mut current: Option<BatchGroup> = None;

    for (i, row) in rows.iter().enumerate().skip(section_row + 3) {
        let opj = normalize_code(cell(rows, i, 0));
        let design = normalize_code(cell(rows, i, 1));
        if opj.is_empty() && design.is_empty() {
            // captions between the header and the first order are not counted
            let started = current.is_some() || !report.batches.is_empty();
            if started && !row_is_blank(row) {
                report.skipped += 1;
            }
            report.batches.extend(current.take());
            continue;
        }

        let date = safe_date_string(cell(rows, i, 4));
        let batch = current.get_or_insert_with(|| BatchGroup {
            first_row: i + 1,
            opj: opj.clone(),
            date: date.clone(),
            ..Default::default()
        });

        let mut entry = EntryRow {
            row: i + 1,
            code: opj,
            date,
            design,
            fabric: cell(rows, i, 2).to_string(),
            rolls: number_or_zero(cell(rows, i, 3)),
            ..Default::default()
        };

        for column in &columns {
            let total: f64 = column
                .indices
                .iter()
                .filter_map(|&c| safe_number(cell(rows, i, c)))
                .sum();
            if total == 0.0 {
                continue;
            }
            match column.role {
                ColumnRole::Dyestuff => add_quantity(&mut batch.dyes, &column.product_name, total),
                ColumnRole::Auxiliary => {
                    add_quantity(&mut entry.auxiliaries, &column.product_name, total)
                }
                ColumnRole::Paste => entry.paste_quantity += total,
            }
        }
        batch.entries.push(entry);
    }
    report.batches.extend(current);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    /// Two dyestuff sections, an AUXILIARIES section with paste, one mesh caption
    fn sheet(data: Vec<Vec<String>>) -> Vec<Vec<String>> {
        let mut rows = vec![
            row(&["LAPORAN COLOR KITCHEN"]),
            row(&[]),
            row(&[
                "OPJ", "DESIGN", "JENIS KAIN", "ROLL", "TGL", "DYESTUFF", "", "", "AUXILIARIES", "", "",
            ]),
            row(&["", "", "", "", "", "REACTIVE", "", "DISPERSE", "", "", "JUMLAH PASTA"]),
            row(&["", "", "", "", "", "red 3bs", "0.4", "blue  2r", "thickener", "red 3BS", ""]),
            row(&["", "", "", "", "", "KG", "", "KG", "KG", "KG", "KG"]),
        ];
        rows.extend(data);
        rows
    }

    #[test]
    fn test_product_columns_inherit_sections() {
        let rows = sheet(vec![]);
        let columns = product_columns(&rows, 2);
        let names: Vec<(&str, ColumnRole)> = columns
            .iter()
            .map(|c| (c.product_name.as_str(), c.role))
            .collect();
        assert_eq!(
            names,
            vec![
                ("RED 3BS", ColumnRole::Dyestuff),
                ("BLUE 2R", ColumnRole::Dyestuff),
                ("THICKENER", ColumnRole::Auxiliary),
                ("JUMLAH PASTA", ColumnRole::Paste),
            ]
        );
        // same product in two sections keeps the role of its first column
        assert_eq!(columns[0].indices, vec![5, 9]);
    }

    #[test]
    fn test_parse_report_groups_batches() {
        let rows = sheet(vec![
            row(&["opj-1", "ds 01", "Katun", "3", "2025-08-01", "1,5", "9", "", "2", "", "40"]),
            row(&["OPJ-2", "DS 02", "KATUN", "2", "2025-08-01", "0,5", "", "1", "", "0,25", "20"]),
            row(&["", "", "", "", "", "2", "", "", "", "", ""]),
            row(&["OPJ-3", "DS 01", "KATUN", "1", "", "", "", "", "", "", ""]),
            row(&[]),
        ]);
        let report = parse_report(&rows).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.batches.len(), 2);

        let first = &report.batches[0];
        assert_eq!(first.first_row, 7);
        assert_eq!(first.code("2025-01-01"), "BATCH-OPJ-1-2025-08-01");
        assert_eq!(
            first.dyes,
            vec![("RED 3BS".to_string(), 2.25), ("BLUE 2R".to_string(), 1.0)]
        );
        assert_eq!(first.entries.len(), 2);
        assert_eq!(first.entries[0].design, "DS 01");
        assert_eq!(first.entries[0].rolls, 3.0);
        assert_eq!(first.entries[0].paste_quantity, 40.0);
        assert_eq!(first.entries[0].auxiliaries, vec![("THICKENER".to_string(), 2.0)]);
        assert!(first.entries[1].auxiliaries.is_empty());

        let second = &report.batches[1];
        assert_eq!(second.code("2025-01-01"), "BATCH-OPJ-3-2025-01-01");
        assert!(second.dyes.is_empty());
        assert_eq!(second.entries[0].date, None);
    }

    #[test]
    fn test_parse_report_requires_header() {
        assert!(parse_report(&[row(&["NO", "OPJ"])]).is_err());
        assert!(parse_report(&[row(&["OPJ", "DESIGN", "JENIS KAIN", "ROLL", "TGL"])]).is_err());
    }
}
