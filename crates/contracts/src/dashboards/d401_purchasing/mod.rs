use crate::dashboards::common::Granularity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PurchasingReportSummary {
    pub total_purchases: f64,
    pub total_quantity: f64,
    pub avg_unit_cost: f64,
    pub highest_purchase_value: f64,
    pub document_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrendQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub granularity: Option<String>,
}

impl TrendQuery {
    pub fn granularity(&self) -> Granularity {
        self.granularity
            .as_deref()
            .map(Granularity::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PurchasingTrendPoint {
    pub period: String,
    pub value: f64,
    pub quantity: f64,
    pub documents: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PurchasingTrend {
    pub granularity: Granularity,
    pub points: Vec<PurchasingTrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierShare {
    pub supplier_ref: String,
    pub supplier_name: String,
    pub value: f64,
    pub documents: u64,
    /// Percentage of the total purchases in range
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SupplierInsights {
    pub unique_suppliers: u64,
    pub top_suppliers: Vec<SupplierShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPurchase {
    pub product_ref: String,
    pub product_name: String,
    pub quantity: f64,
    pub value: f64,
    pub avg_unit_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductInsights {
    pub top_by_unit_cost: Vec<ProductPurchase>,
    pub top_by_value: Vec<ProductPurchase>,
}
