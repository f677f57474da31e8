use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Stock movement document identifier
    StockMovementId
);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StockMovementLine {
    pub product_ref: String,
    pub quantity: f64,
    /// Average cost captured at posting time
    #[serde(default)]
    pub unit_cost_used: f64,
}

impl StockMovementLine {
    pub fn total_cost(&self) -> f64 {
        self.quantity * self.unit_cost_used
    }
}

/// Transfer of goods from the warehouse (Gudang) to the color kitchen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    #[serde(flatten)]
    pub base: BaseAggregate<StockMovementId>,

    pub document_date: String,
    pub lines: Vec<StockMovementLine>,
}

impl StockMovement {
    pub fn new_for_insert(code: &str, document_date: &str, lines: Vec<StockMovementLine>) -> Self {
        let code = normalize_code(code);
        let base = BaseAggregate::new(
            StockMovementId::new_v4(),
            code.clone(),
            format!("{} {}", code, document_date),
        );
        Self {
            base,
            document_date: document_date.to_string(),
            lines,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn total_quantity(&self) -> f64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(StockMovementLine::total_cost).sum()
    }

    pub fn update(&mut self, dto: &StockMovementDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = format!("{} {}", self.base.code, dto.document_date);
        self.base.set_comment(dto.comment.clone());
        self.document_date = dto.document_date.clone();
        self.lines = dto.lines.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.is_empty() {
            return Err("Document number is required".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.document_date, "%Y-%m-%d").is_err() {
            return Err("Document date must be YYYY-MM-DD".into());
        }
        for (i, line) in self.lines.iter().enumerate() {
            if line.product_ref.trim().is_empty() {
                return Err(format!("Line {}: product is required", i + 1));
            }
            if line.quantity <= 0.0 {
                return Err(format!("Line {}: quantity must be positive", i + 1));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    StockMovement,
    StockMovementId,
    "a008",
    "stock_movement",
    "Stock movement",
    "Stock movements"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StockMovementDto {
    pub id: Option<String>,
    pub code: String,
    pub document_date: String,
    pub lines: Vec<StockMovementLine>,
    pub comment: Option<String>,
}

impl From<&StockMovement> for StockMovementDto {
    fn from(m: &StockMovement) -> Self {
        Self {
            id: Some(m.to_string_id()),
            code: m.base.code.clone(),
            document_date: m.document_date.clone(),
            lines: m.lines.clone(),
            comment: m.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovementListItem {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub line_count: usize,
    pub total_quantity: f64,
    pub total_cost: f64,
    pub is_posted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let m = StockMovement::new_for_insert(
            "sm-01",
            "2025-07-02",
            vec![
                StockMovementLine {
                    product_ref: "a".into(),
                    quantity: 2.0,
                    unit_cost_used: 1500.0,
                },
                StockMovementLine {
                    product_ref: "b".into(),
                    quantity: 0.5,
                    unit_cost_used: 0.0,
                },
            ],
        );
        assert_eq!(m.total_quantity(), 2.5);
        assert_eq!(m.total_cost(), 3000.0);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let m = StockMovement::new_for_insert(
            "sm-02",
            "2025-07-02",
            vec![StockMovementLine {
                product_ref: "a".into(),
                quantity: 0.0,
                unit_cost_used: 0.0,
            }],
        );
        assert!(m.validate().is_err());
    }
}
