use super::parser::{group_movements, parse_rows};
use crate::domain::{a002_product, a008_stock_movement};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use contracts::domain::a008_stock_movement::StockMovement;
use contracts::usecases::common::{RowError, SheetRowsRequest};
use contracts::usecases::u502_import_stock_movement::StockMovementImportResponse;

/// Creates and posts one stock movement per (NOBUKTI, TANGGAL)
pub async fn import(request: SheetRowsRequest) -> ServiceResult<StockMovementImportResponse> {
    let parsed = parse_rows(&request.rows).map_err(ServiceError::Validation)?;
    let products = a002_product::repository::id_by_name().await?;
    let (groups, mut errors) = group_movements(&parsed.rows, &products);

    let mut response = StockMovementImportResponse {
        skipped: parsed.skipped,
        ..Default::default()
    };

    for group in groups {
        if a008_stock_movement::repository::find_by_code_and_date(&group.code, &group.date)
            .await?
            .is_some()
        {
            errors.push(RowError::new(
                group.first_row,
                format!("movement {} on {} already exists", group.code, group.date),
            ));
            continue;
        }

        let line_count = group.lines.len();
        let mut doc = StockMovement::new_for_insert(&group.code, &group.date, group.lines);
        if let Err(e) = doc.validate() {
            errors.push(RowError::new(group.first_row, e));
            continue;
        }
        doc.before_write();
        let id = a008_stock_movement::repository::insert(&doc).await?;
        a008_stock_movement::posting::post_document(id).await?;

        response.movements += 1;
        response.details += line_count;
    }
    response.errors = errors;

    let message = format!(
        "u502 {}: {} movements, {} lines, {} skipped, {} errors",
        request.file_name,
        response.movements,
        response.details,
        response.skipped,
        response.errors.len()
    );
    tracing::info!("{}", message);
    logger::log("import", &message);

    Ok(response)
}
