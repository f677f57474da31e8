use crate::shared::api_utils::{get_json, post_json, query_string, with_query};
use contracts::domain::a011_stock_opname::{StockOpname, StockOpnameDto, SystemQuantity};
use contracts::shared::list::SavedId;

pub const ENDPOINT: &str = "/api/a011_stock_opname";

pub async fn fetch_by_id(id: &str) -> Result<StockOpname, String> {
    get_json(&format!("{}/{}", ENDPOINT, id)).await
}

pub async fn save(dto: &StockOpnameDto) -> Result<SavedId, String> {
    post_json(ENDPOINT, dto).await
}

/// Gudang balance of a product at the end of `date`
pub async fn fetch_system_quantity(product_ref: &str, date: &str) -> Result<f64, String> {
    let path = with_query(
        &format!("{}/system_quantity/{}", ENDPOINT, product_ref),
        &query_string(&[("date", Some(date.to_string()))]),
    );
    get_json::<SystemQuantity>(&path).await.map(|q| q.quantity)
}
