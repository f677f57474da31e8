use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ColorKitchenSummary {
    pub total_cost: f64,
    pub total_dye_cost: f64,
    pub total_aux_cost: f64,
    pub total_rolls_processed: f64,
    pub avg_cost_per_roll: f64,
    pub total_batches: u64,
    pub total_entries: u64,
    pub avg_cost_per_batch: f64,
    pub avg_cost_per_entry: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChemicalKind {
    #[default]
    Dye,
    Aux,
}

impl ChemicalKind {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("aux") {
            ChemicalKind::Aux
        } else {
            ChemicalKind::Dye
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsageQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// dye | aux
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChemicalUsageRow {
    pub product_ref: String,
    pub product_name: String,
    pub quantity: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChemicalUsage {
    pub dye_quantity: f64,
    pub dye_cost: f64,
    pub aux_quantity: f64,
    pub aux_cost: f64,
    pub kind: ChemicalKind,
    pub breakdown: Vec<ChemicalUsageRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KitchenTrendPoint {
    pub period: String,
    pub dye_cost: f64,
    pub aux_cost: f64,
    pub rolls: f64,
}
