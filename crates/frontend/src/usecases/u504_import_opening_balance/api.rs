use crate::shared::api_utils::post_json;
use contracts::usecases::common::SheetRowsRequest;
use contracts::usecases::u504_import_opening_balance::OpeningBalanceResponse;

pub async fn import(body: &SheetRowsRequest) -> Result<OpeningBalanceResponse, String> {
    post_json("/api/u504/import", body).await
}
