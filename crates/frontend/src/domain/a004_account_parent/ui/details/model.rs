use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a004_account_parent::{AccountParent, AccountParentDto};
use contracts::shared::list::SavedId;

const ENDPOINT: &str = "/api/a004_account_parent";

pub async fn fetch_by_id(id: &str) -> Result<AccountParent, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &AccountParentDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
