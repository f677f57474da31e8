use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Stock opname identifier
    StockOpnameId
);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StockOpnameLine {
    pub product_ref: String,
    /// Balance recorded by the system
    pub system_quantity: f64,
    /// Counted quantity
    pub physical_quantity: f64,
    /// system_quantity - physical_quantity
    #[serde(default)]
    pub difference: f64,
}

impl StockOpnameLine {
    pub fn calc_difference(&self) -> f64 {
        self.system_quantity - self.physical_quantity
    }

    pub fn recalculate(&mut self) {
        self.difference = self.calc_difference();
    }
}

/// Human readable stock movement implied by an opname difference
pub fn describe_difference(difference: f64) -> String {
    if difference > 0.0 {
        format!("OUT {} from Gudang", trim_float(difference))
    } else if difference < 0.0 {
        format!(
            "IN {} to Gudang (OUT from Kitchen)",
            trim_float(difference.abs())
        )
    } else {
        "MATCH".to_string()
    }
}

fn trim_float(v: f64) -> String {
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Physical count reconciled against the system balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOpname {
    #[serde(flatten)]
    pub base: BaseAggregate<StockOpnameId>,

    pub document_date: String,
    pub lines: Vec<StockOpnameLine>,
}

impl StockOpname {
    pub fn new_for_insert(code: &str, document_date: &str, lines: Vec<StockOpnameLine>) -> Self {
        let code = normalize_code(code);
        let base = BaseAggregate::new(
            StockOpnameId::new_v4(),
            code.clone(),
            format!("{} {}", code, document_date),
        );
        let mut doc = Self {
            base,
            document_date: document_date.to_string(),
            lines,
        };
        doc.recalculate();
        doc
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn recalculate(&mut self) {
        self.lines.iter_mut().for_each(StockOpnameLine::recalculate);
    }

    pub fn total_difference(&self) -> f64 {
        self.lines.iter().map(|l| l.difference).sum()
    }

    pub fn update(&mut self, dto: &StockOpnameDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = format!("{} {}", self.base.code, dto.document_date);
        self.base.set_comment(dto.comment.clone());
        self.document_date = dto.document_date.clone();
        self.lines = dto.lines.clone();
        self.recalculate();
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
            if line.physical_quantity < 0.0 {
                return Err(format!("Line {}: physical quantity must not be negative", i + 1));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    StockOpname,
    StockOpnameId,
    "a011",
    "stock_opname",
    "Stock opname",
    "Stock opname"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StockOpnameDto {
    pub id: Option<String>,
    pub code: String,
    pub document_date: String,
    pub lines: Vec<StockOpnameLine>,
    pub comment: Option<String>,
}

impl From<&StockOpname> for StockOpnameDto {
    fn from(o: &StockOpname) -> Self {
        Self {
            id: Some(o.to_string_id()),
            code: o.base.code.clone(),
            document_date: o.document_date.clone(),
            lines: o.lines.clone(),
            comment: o.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOpnameListItem {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub line_count: usize,
    pub total_difference: f64,
    pub is_posted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SystemQuantityQuery {
    /// Cut-off date, today when omitted
    #[serde(default)]
    pub date: Option<String>,
}

/// Response of the system quantity lookup used to prefill opname lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemQuantity {
    pub product_ref: String,
    pub date: Option<String>,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_system_minus_physical() {
        let doc = StockOpname::new_for_insert(
            "so-20250731",
            "2025-07-31",
            vec![
                StockOpnameLine {
                    product_ref: "a".into(),
                    system_quantity: 10.0,
                    physical_quantity: 7.5,
                    difference: 0.0,
                },
                StockOpnameLine {
                    product_ref: "b".into(),
                    system_quantity: 1.0,
                    physical_quantity: 3.0,
                    difference: 99.0,
                },
            ],
        );
        assert_eq!(doc.lines[0].difference, 2.5);
        assert_eq!(doc.lines[1].difference, -2.0);
        assert_eq!(doc.total_difference(), 0.5);
        assert_eq!(doc.base.code, "SO-20250731");
    }

    #[test]
    fn test_describe_difference() {
        assert_eq!(describe_difference(0.0), "MATCH");
        assert_eq!(describe_difference(2.5), "OUT 2.5 from Gudang");
        assert_eq!(describe_difference(-4.0), "IN 4 to Gudang (OUT from Kitchen)");
    }
}
