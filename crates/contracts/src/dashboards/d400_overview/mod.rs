use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StockFlowPoint {
    /// YYYY-MM
    pub period: String,
    pub stock_in: f64,
    pub stock_used: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CostTrendPoint {
    pub period: String,
    pub dye_cost: f64,
    pub aux_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductUsage {
    pub product_ref: String,
    pub product_name: String,
    pub quantity: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OverviewResponse {
    pub total_purchasing: f64,
    pub total_stock_used: f64,
    pub total_dye_cost: f64,
    pub total_aux_cost: f64,
    pub total_production_cost: f64,
    pub total_jobs: u64,
    pub avg_cost_per_job: f64,
    pub stock_flow: Vec<StockFlowPoint>,
    pub cost_trend: Vec<CostTrendPoint>,
    /// Top 10 by quantity moved to the kitchen
    pub most_used_products: Vec<ProductUsage>,
}
