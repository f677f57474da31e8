//! Workbook reading through SheetJS (see `parseExcelWorkbook` in index.html).

use contracts::usecases::common::{SheetData, SheetRowsRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelWorkbook, catch)]
    fn parse_excel_workbook(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Reads every sheet of the file as rows of formatted cell text
pub async fn read_workbook(file: web_sys::File) -> Result<Vec<SheetData>, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();

    let parsed =
        parse_excel_workbook(&bytes).map_err(|e| format!("Failed to parse workbook: {:?}", e))?;
    serde_wasm_bindgen::from_value(parsed).map_err(|e| format!("Unexpected workbook shape: {}", e))
}

/// First file selected in an `<input type="file">` change event
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Picks the sheet to import: the named one, else the first non-empty one
pub fn pick_sheet(sheets: Vec<SheetData>, preferred: Option<&str>) -> Option<SheetData> {
    if let Some(name) = preferred {
        if let Some(sheet) = sheets.iter().find(|s| s.name.eq_ignore_ascii_case(name)) {
            return Some(sheet.clone());
        }
    }
    sheets.into_iter().find(|s| !s.rows.is_empty())
}

/// Reads `file` and builds the body of a single-sheet import
pub async fn read_sheet_request(
    file: web_sys::File,
    preferred_sheet: Option<&str>,
    as_of_date: Option<String>,
) -> Result<SheetRowsRequest, String> {
    let file_name = file.name();
    let sheets = read_workbook(file).await?;
    let sheet = pick_sheet(sheets, preferred_sheet).ok_or("The workbook has no rows")?;
    Ok(SheetRowsRequest {
        file_name,
        sheet_name: Some(sheet.name),
        rows: sheet.rows,
        as_of_date: as_of_date.filter(|d| !d.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str, rows: usize) -> SheetData {
        SheetData {
            name: name.into(),
            rows: vec![vec!["x".into()]; rows],
        }
    }

    #[test]
    fn test_pick_sheet_prefers_named_then_first_with_rows() {
        let sheets = vec![sheet("Empty", 0), sheet("Data", 2), sheet("LAP", 1)];
        assert_eq!(pick_sheet(sheets.clone(), Some("lap")).map(|s| s.name), Some("LAP".into()));
        assert_eq!(pick_sheet(sheets.clone(), Some("nope")).map(|s| s.name), Some("Data".into()));
        assert_eq!(pick_sheet(sheets, None).map(|s| s.name), Some("Data".into()));
    }
}
