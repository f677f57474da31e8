use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a001_supplier::{Supplier, SupplierDto};
use contracts::shared::list::SavedId;

const ENDPOINT: &str = "/api/a001_supplier";

pub async fn fetch_by_id(id: &str) -> Result<Supplier, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &SupplierDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
