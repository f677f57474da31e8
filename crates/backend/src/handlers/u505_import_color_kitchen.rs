use axum::Json;
use contracts::usecases::u505_import_color_kitchen::{
    ColorKitchenImportRequest, ColorKitchenImportResponse,
};

use crate::shared::error::ServiceResult;
use crate::usecases::u505_import_color_kitchen::executor;

/// POST /api/u505/import
pub async fn import(
    Json(request): Json<ColorKitchenImportRequest>,
) -> ServiceResult<Json<ColorKitchenImportResponse>> {
    Ok(Json(executor::import(request).await?))
}
