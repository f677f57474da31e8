use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a008_stock_movement::{StockMovement, StockMovementDto};
use contracts::shared::list::SavedId;

pub const ENDPOINT: &str = "/api/a008_stock_movement";

pub async fn fetch_by_id(id: &str) -> Result<StockMovement, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &StockMovementDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}
