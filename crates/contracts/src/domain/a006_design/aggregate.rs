use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Printing design identifier
    DesignId
);

/// Printing design, referenced by color kitchen entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    #[serde(flatten)]
    pub base: BaseAggregate<DesignId>,

    /// Reference to a005_design_type
    pub design_type_ref: String,
}

impl Design {
    pub fn new_for_insert(code: &str, design_type_ref: String) -> Self {
        let code = normalize_code(code);
        Self {
            base: BaseAggregate::new(DesignId::new_v4(), code.clone(), code),
            design_type_ref,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &DesignDto) {
        let code = normalize_code(&dto.code);
        self.base.description = dto
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| code.clone());
        self.base.code = code;
        self.base.set_comment(dto.comment.clone());
        self.design_type_ref = dto.design_type_ref.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.is_empty() {
            return Err("Design code is required".into());
        }
        if self.design_type_ref.trim().is_empty() {
            return Err("Design type is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Design, DesignId, "a006", "design", "Design", "Designs");

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesignDto {
    pub id: Option<String>,
    pub code: String,
    pub description: Option<String>,
    pub design_type_ref: String,
    pub comment: Option<String>,
}

impl From<&Design> for DesignDto {
    fn from(d: &Design) -> Self {
        Self {
            id: Some(d.to_string_id()),
            code: d.base.code.clone(),
            description: Some(d.base.description.clone()),
            design_type_ref: d.design_type_ref.clone(),
            comment: d.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignListItem {
    pub id: String,
    pub code: String,
    pub description: String,
    pub design_type_ref: String,
    pub design_type_name: Option<String>,
}
