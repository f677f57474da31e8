use crate::domain::a009_color_kitchen_batch::aggregate::{
    validate_consumption_lines, ConsumptionLine,
};
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Color kitchen entry identifier
    ColorKitchenEntryId
);

/// Printing job (OPJ): design, rolls and the auxiliaries consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorKitchenEntry {
    #[serde(flatten)]
    pub base: BaseAggregate<ColorKitchenEntryId>,

    pub document_date: String,
    pub rolls: f64,
    pub paste_quantity: f64,
    /// Reference to a006_design
    pub design_ref: String,
    /// Reference to a009_color_kitchen_batch
    pub batch_ref: Option<String>,
    pub auxiliaries: Vec<ConsumptionLine>,
}

impl ColorKitchenEntry {
    pub fn new_for_insert(code: &str, document_date: &str, design_ref: String) -> Self {
        let code = normalize_code(code);
        let base = BaseAggregate::new(
            ColorKitchenEntryId::new_v4(),
            code.clone(),
            format!("{} {}", code, document_date),
        );
        Self {
            base,
            document_date: document_date.to_string(),
            rolls: 0.0,
            paste_quantity: 0.0,
            design_ref,
            batch_ref: None,
            auxiliaries: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn recalculate(&mut self) {
        self.auxiliaries
            .iter_mut()
            .for_each(ConsumptionLine::recalculate);
    }

    pub fn total_cost(&self) -> f64 {
        self.auxiliaries.iter().map(|l| l.total_cost).sum()
    }

    pub fn update(&mut self, dto: &ColorKitchenEntryDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = format!("{} {}", self.base.code, dto.document_date);
        self.base.set_comment(dto.comment.clone());
        self.document_date = dto.document_date.clone();
        self.rolls = dto.rolls;
        self.paste_quantity = dto.paste_quantity;
        self.design_ref = dto.design_ref.clone();
        self.batch_ref = dto.batch_ref.clone().filter(|b| !b.is_empty());
        self.auxiliaries = dto.auxiliaries.clone();
        self.recalculate();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.is_empty() {
            return Err("OPJ number is required".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.document_date, "%Y-%m-%d").is_err() {
            return Err("Document date must be YYYY-MM-DD".into());
        }
        if self.design_ref.trim().is_empty() {
            return Err("Design is required".into());
        }
        if self.rolls < 0.0 || self.paste_quantity < 0.0 {
            return Err("Rolls and paste quantity must not be negative".into());
        }
        validate_consumption_lines(&self.auxiliaries)
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    ColorKitchenEntry,
    ColorKitchenEntryId,
    "a010",
    "color_kitchen_entry",
    "CK entry",
    "CK entries"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ColorKitchenEntryDto {
    pub id: Option<String>,
    pub code: String,
    pub document_date: String,
    pub rolls: f64,
    pub paste_quantity: f64,
    pub design_ref: String,
    pub batch_ref: Option<String>,
    pub auxiliaries: Vec<ConsumptionLine>,
    pub comment: Option<String>,
}

impl From<&ColorKitchenEntry> for ColorKitchenEntryDto {
    fn from(e: &ColorKitchenEntry) -> Self {
        Self {
            id: Some(e.to_string_id()),
            code: e.base.code.clone(),
            document_date: e.document_date.clone(),
            rolls: e.rolls,
            paste_quantity: e.paste_quantity,
            design_ref: e.design_ref.clone(),
            batch_ref: e.batch_ref.clone(),
            auxiliaries: e.auxiliaries.clone(),
            comment: e.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorKitchenEntryListItem {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub rolls: f64,
    pub paste_quantity: f64,
    pub design_ref: String,
    pub design_code: Option<String>,
    pub batch_ref: Option<String>,
    pub batch_code: Option<String>,
    pub total_cost: f64,
    pub is_posted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drops_empty_batch_ref() {
        let mut entry = ColorKitchenEntry::new_for_insert("opj-1", "2025-07-04", "d".into());
        entry.update(&ColorKitchenEntryDto {
            code: "opj-1".into(),
            document_date: "2025-07-04".into(),
            rolls: 12.0,
            paste_quantity: 40.0,
            design_ref: "d".into(),
            batch_ref: Some(String::new()),
            auxiliaries: vec![ConsumptionLine {
                product_ref: "aux".into(),
                quantity: 2.0,
                unit_cost_used: 25.0,
                total_cost: 0.0,
            }],
            ..Default::default()
        });
        assert_eq!(entry.batch_ref, None);
        assert_eq!(entry.total_cost(), 50.0);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_design_required() {
        let entry = ColorKitchenEntry::new_for_insert("opj-2", "2025-07-04", String::new());
        assert!(entry.validate().is_err());
    }
}
