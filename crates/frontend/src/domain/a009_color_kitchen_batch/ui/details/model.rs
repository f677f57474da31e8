use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a009_color_kitchen_batch::{ColorKitchenBatch, ColorKitchenBatchDto};
use contracts::shared::list::SavedId;

pub const ENDPOINT: &str = "/api/a009_color_kitchen_batch";

pub async fn fetch_by_id(id: &str) -> Result<ColorKitchenBatch, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &ColorKitchenBatchDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
