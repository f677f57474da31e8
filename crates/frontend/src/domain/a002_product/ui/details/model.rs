use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::shared::list::SavedId;

const ENDPOINT: &str = "/api/a002_product";

pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &ProductDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
