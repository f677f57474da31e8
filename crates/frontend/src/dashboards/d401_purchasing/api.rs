use crate::shared::api_utils::get_json;
use contracts::dashboards::d401_purchasing::{
    ProductInsights, PurchasingReportSummary, PurchasingTrend, SupplierInsights,
};

pub const SUMMARY: &str = "/api/d401_purchasing/summary";
pub const TREND: &str = "/api/d401_purchasing/trend";
pub const SUPPLIERS: &str = "/api/d401_purchasing/suppliers";
pub const PRODUCTS: &str = "/api/d401_purchasing/products";

pub async fn get_summary(path: &str) -> Result<PurchasingReportSummary, String> {
    get_json(path).await
}

pub async fn get_trend(path: &str) -> Result<PurchasingTrend, String> {
    get_json(path).await
}

pub async fn get_suppliers(path: &str) -> Result<SupplierInsights, String> {
    get_json(path).await
}

pub async fn get_products(path: &str) -> Result<ProductInsights, String> {
    get_json(path).await
}
