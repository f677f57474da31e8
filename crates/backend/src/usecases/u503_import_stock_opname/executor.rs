use super::parser::{opname_code, parse_rows, preview_rows};
use crate::domain::{a002_product, a011_stock_opname};
use crate::shared::config::get_config;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use crate::usecases::resolve_as_of_date;
use contracts::domain::a011_stock_opname::{StockOpname, StockOpnameLine};
use contracts::usecases::common::{CreatedDocument, SheetRowsRequest};
use contracts::usecases::u503_import_stock_opname::{OpnameImportResponse, OpnamePreviewResponse};

/// Parses the sheet and shows what the import would do, without writing
pub async fn preview(request: SheetRowsRequest) -> ServiceResult<OpnamePreviewResponse> {
    let rows = parse_rows(&request.rows).map_err(ServiceError::Validation)?;
    let products = a002_product::repository::id_by_name().await?;
    let limit = get_config()?.import.max_preview_rows;

    Ok(OpnamePreviewResponse {
        total_rows: rows.len(),
        rows: preview_rows(&rows, &products, limit),
    })
}

/// Creates one posted opname document dated `as_of_date`
pub async fn import(request: SheetRowsRequest) -> ServiceResult<OpnameImportResponse> {
    let rows = parse_rows(&request.rows).map_err(ServiceError::Validation)?;
    let date = resolve_as_of_date(request.as_of_date.as_deref())?
        .format("%Y-%m-%d")
        .to_string();
    let code = opname_code(&date);

    if a011_stock_opname::repository::find_by_code(&code).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Stock opname {} already exists",
            code
        )));
    }

    let products = a002_product::repository::id_by_name().await?;
    let mut skipped = Vec::new();
    let mut lines = Vec::new();
    for r in &rows {
        match products.get(&r.product_name) {
            Some(product_ref) => {
                let mut line = StockOpnameLine {
                    product_ref: product_ref.clone(),
                    system_quantity: r.system_quantity,
                    physical_quantity: r.physical_quantity,
                    difference: 0.0,
                };
                line.recalculate();
                lines.push(line);
            }
            None => skipped.push(r.product_name.clone()),
        }
    }

    if lines.is_empty() {
        tracing::warn!("u503 {}: no known products, nothing imported", request.file_name);
        return Ok(OpnameImportResponse {
            document: None,
            skipped,
        });
    }

    let line_count = lines.len();
    let mut doc = StockOpname::new_for_insert(&code, &date, lines);
    doc.recalculate();
    doc.validate().map_err(ServiceError::Validation)?;
    doc.before_write();
    let id = a011_stock_opname::repository::insert(&doc).await?;
    a011_stock_opname::posting::post_document(id).await?;

    let message = format!(
        "u503 {}: {} with {} lines, {} products skipped",
        request.file_name,
        code,
        line_count,
        skipped.len()
    );
    tracing::info!("{}", message);
    logger::log("import", &message);

    Ok(OpnameImportResponse {
        document: Some(CreatedDocument {
            id: id.to_string(),
            code,
            document_date: date,
            lines: line_count,
        }),
        skipped,
    })
}
