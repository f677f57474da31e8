use axum::Json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u504_import_opening_balance::OpeningBalanceResponse;

use crate::shared::error::ServiceResult;
use crate::usecases::u504_import_opening_balance::executor;

/// POST /api/u504/import
pub async fn import(
    Json(request): Json<SheetRowsRequest>,
) -> ServiceResult<Json<OpeningBalanceResponse>> {
    Ok(Json(executor::import(request).await?))
}
