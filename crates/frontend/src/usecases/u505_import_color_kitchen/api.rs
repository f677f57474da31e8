use crate::shared::api_utils::post_json;
use contracts::usecases::u505_import_color_kitchen::{
    ColorKitchenImportRequest, ColorKitchenImportResponse,
};

pub async fn import(body: &ColorKitchenImportRequest) -> Result<ColorKitchenImportResponse, String> {
    post_json("/api/u505/import", body).await
}
