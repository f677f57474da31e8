use axum::Json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u503_import_stock_opname::{OpnameImportResponse, OpnamePreviewResponse};

use crate::shared::error::ServiceResult;
use crate::usecases::u503_import_stock_opname::executor;

/// POST /api/u503/preview
pub async fn preview(
    Json(request): Json<SheetRowsRequest>,
) -> ServiceResult<Json<OpnamePreviewResponse>> {
    Ok(Json(executor::preview(request).await?))
}

/// POST /api/u503/import
pub async fn import(
    Json(request): Json<SheetRowsRequest>,
) -> ServiceResult<Json<OpnameImportResponse>> {
    Ok(Json(executor::import(request).await?))
}
