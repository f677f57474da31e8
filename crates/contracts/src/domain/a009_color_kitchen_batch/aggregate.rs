use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Color kitchen batch identifier
    ColorKitchenBatchId
);

/// Chemical consumed in the color kitchen (dye of a batch or auxiliary of an entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConsumptionLine {
    pub product_ref: String,
    pub quantity: f64,
    /// Average cost; filled from p901 when left at 0
    #[serde(default)]
    pub unit_cost_used: f64,
    /// quantity * unit_cost_used
    #[serde(default)]
    pub total_cost: f64,
}

impl ConsumptionLine {
    pub fn recalculate(&mut self) {
        self.total_cost = self.quantity * self.unit_cost_used;
    }
}

pub(crate) fn validate_consumption_lines(lines: &[ConsumptionLine]) -> Result<(), String> {
    for (i, line) in lines.iter().enumerate() {
        if line.product_ref.trim().is_empty() {
            return Err(format!("Line {}: product is required", i + 1));
        }
        if line.quantity <= 0.0 {
            return Err(format!("Line {}: quantity must be positive", i + 1));
        }
        if line.unit_cost_used < 0.0 {
            return Err(format!("Line {}: unit cost must not be negative", i + 1));
        }
    }
    Ok(())
}

/// Dyes mixed into a paste batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorKitchenBatch {
    #[serde(flatten)]
    pub base: BaseAggregate<ColorKitchenBatchId>,

    pub document_date: String,
    pub dyes: Vec<ConsumptionLine>,
}

impl ColorKitchenBatch {
    pub fn new_for_insert(code: &str, document_date: &str, dyes: Vec<ConsumptionLine>) -> Self {
        let code = normalize_code(code);
        let base = BaseAggregate::new(
            ColorKitchenBatchId::new_v4(),
            code.clone(),
            format!("{} {}", code, document_date),
        );
        let mut batch = Self {
            base,
            document_date: document_date.to_string(),
            dyes,
        };
        batch.recalculate();
        batch
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn recalculate(&mut self) {
        self.dyes.iter_mut().for_each(ConsumptionLine::recalculate);
    }

    pub fn total_cost(&self) -> f64 {
        self.dyes.iter().map(|l| l.total_cost).sum()
    }

    pub fn update(&mut self, dto: &ColorKitchenBatchDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = format!("{} {}", self.base.code, dto.document_date);
        self.base.set_comment(dto.comment.clone());
        self.document_date = dto.document_date.clone();
        self.dyes = dto.dyes.clone();
        self.recalculate();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.is_empty() {
            return Err("Batch code is required".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.document_date, "%Y-%m-%d").is_err() {
            return Err("Document date must be YYYY-MM-DD".into());
        }
        validate_consumption_lines(&self.dyes)
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    ColorKitchenBatch,
    ColorKitchenBatchId,
    "a009",
    "color_kitchen_batch",
    "CK batch",
    "CK batches"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ColorKitchenBatchDto {
    pub id: Option<String>,
    pub code: String,
    pub document_date: String,
    pub dyes: Vec<ConsumptionLine>,
    pub comment: Option<String>,
}

impl From<&ColorKitchenBatch> for ColorKitchenBatchDto {
    fn from(b: &ColorKitchenBatch) -> Self {
        Self {
            id: Some(b.to_string_id()),
            code: b.base.code.clone(),
            document_date: b.document_date.clone(),
            dyes: b.dyes.clone(),
            comment: b.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorKitchenBatchListItem {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub dye_count: usize,
    pub total_cost: f64,
    pub entry_count: u64,
    pub is_posted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost_recalculated() {
        let mut batch = ColorKitchenBatch::new_for_insert(
            "b-1",
            "2025-07-03",
            vec![ConsumptionLine {
                product_ref: "dye".into(),
                quantity: 1.5,
                unit_cost_used: 200.0,
                total_cost: 0.0,
            }],
        );
        assert_eq!(batch.total_cost(), 300.0);
        batch.dyes[0].unit_cost_used = 100.0;
        batch.before_write();
        assert_eq!(batch.total_cost(), 150.0);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let batch = ColorKitchenBatch::new_for_insert(
            "b-2",
            "2025-07-03",
            vec![ConsumptionLine {
                product_ref: "dye".into(),
                quantity: 1.0,
                unit_cost_used: -1.0,
                total_cost: 0.0,
            }],
        );
        assert!(batch.validate().is_err());
    }
}
