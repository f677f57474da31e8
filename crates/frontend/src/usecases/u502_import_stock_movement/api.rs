use crate::shared::api_utils::post_json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u502_import_stock_movement::StockMovementImportResponse;

pub async fn import(body: &SheetRowsRequest) -> Result<StockMovementImportResponse, String> {
    post_json("/api/u502/import", body).await
}
