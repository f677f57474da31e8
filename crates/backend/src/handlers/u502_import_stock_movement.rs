use axum::Json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u502_import_stock_movement::StockMovementImportResponse;

use crate::shared::error::ServiceResult;
use crate::usecases::u502_import_stock_movement::executor;

/// POST /api/u502/import
pub async fn import(
    Json(request): Json<SheetRowsRequest>,
) -> ServiceResult<Json<StockMovementImportResponse>> {
    Ok(Json(executor::import(request).await?))
}
