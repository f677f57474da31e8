use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_design_type;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Fabric/design type identifier
    DesignTypeId
);

/// Fabric type of a design (HYGET, BILLABONG, ...). Name is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignType {
    #[serde(flatten)]
    pub base: BaseAggregate<DesignTypeId>,
}

impl DesignType {
    pub fn new_for_insert(name: &str) -> Self {
        let normalized = normalize_design_type(name).unwrap_or_default();
        Self {
            base: BaseAggregate::new(DesignTypeId::new_v4(), normalized.clone(), normalized),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &DesignTypeDto) {
        let normalized = normalize_design_type(&dto.description).unwrap_or_default();
        self.base.code = normalized.clone();
        self.base.description = normalized;
        self.base.set_comment(dto.comment.clone());
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.is_empty() {
            return Err("Design type name is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    DesignType,
    DesignTypeId,
    "a005",
    "design_type",
    "Design type",
    "Design types"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesignTypeDto {
    pub id: Option<String>,
    pub description: String,
    pub comment: Option<String>,
}

impl From<&DesignType> for DesignTypeDto {
    fn from(t: &DesignType) -> Self {
        Self {
            id: Some(t.to_string_id()),
            description: t.base.description.clone(),
            comment: t.base.comment.clone(),
        }
    }
}
