use crate::shared::api_utils::post_json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u503_import_stock_opname::{OpnameImportResponse, OpnamePreviewResponse};

/// Computes differences without writing anything
pub async fn preview(body: &SheetRowsRequest) -> Result<OpnamePreviewResponse, String> {
    post_json("/api/u503/preview", body).await
}

pub async fn import(body: &SheetRowsRequest) -> Result<OpnameImportResponse, String> {
    post_json("/api/u503/import", body).await
}
