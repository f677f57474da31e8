use crate::shared::api_utils::get_json;
use contracts::dashboards::d402_color_kitchen::{ChemicalUsage, ColorKitchenSummary, KitchenTrendPoint};

pub const SUMMARY: &str = "/api/d402_color_kitchen/summary";
pub const USAGE: &str = "/api/d402_color_kitchen/usage";
pub const TREND: &str = "/api/d402_color_kitchen/trend";

pub async fn get_summary(path: &str) -> Result<ColorKitchenSummary, String> {
    get_json(path).await
}

pub async fn get_usage(path: &str) -> Result<ChemicalUsage, String> {
    get_json(path).await
}

pub async fn get_trend(path: &str) -> Result<Vec<KitchenTrendPoint>, String> {
    get_json(path).await
}
