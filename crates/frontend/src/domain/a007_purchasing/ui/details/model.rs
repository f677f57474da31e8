use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a007_purchasing::{Purchasing, PurchasingDto};
use contracts::shared::list::SavedId;

pub const ENDPOINT: &str = "/api/a007_purchasing";

pub async fn fetch_by_id(id: &str) -> Result<Purchasing, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

/// Saving also posts the document
pub async fn save(dto: &PurchasingDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
