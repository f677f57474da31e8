use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a006_design::{Design, DesignDto};
use contracts::shared::list::SavedId;

const ENDPOINT: &str = "/api/a006_design";

pub async fn fetch_by_id(id: &str) -> Result<Design, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &DesignDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
