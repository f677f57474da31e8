use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a010_color_kitchen_entry::{ColorKitchenEntry, ColorKitchenEntryDto};
use contracts::shared::list::SavedId;

pub const ENDPOINT: &str = "/api/a010_color_kitchen_entry";

pub async fn fetch_by_id(id: &str) -> Result<ColorKitchenEntry, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &ColorKitchenEntryDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
