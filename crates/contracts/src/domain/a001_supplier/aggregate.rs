use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::{normalize_code, normalize_supplier_name};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Supplier identifier
    SupplierId
);

/// Supplier of chemicals and spare parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    pub contact_info: Option<String>,
}

impl Supplier {
    pub fn new_for_insert(code: &str, name: &str, contact_info: Option<String>) -> Self {
        let base = BaseAggregate::new(
            SupplierId::new_v4(),
            normalize_code(code),
            normalize_supplier_name(name).unwrap_or_default(),
        );
        Self { base, contact_info }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SupplierDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = normalize_supplier_name(&dto.description).unwrap_or_default();
        self.base.set_comment(dto.comment.clone());
        self.contact_info = dto.contact_info.clone().filter(|c| !c.trim().is_empty());
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Supplier code is required".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Supplier name is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Supplier, SupplierId, "a001", "supplier", "Supplier", "Suppliers");

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SupplierDto {
    pub id: Option<String>,
    pub code: String,
    /// Supplier name
    pub description: String,
    pub contact_info: Option<String>,
    pub comment: Option<String>,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            id: Some(s.to_string_id()),
            code: s.base.code.clone(),
            description: s.base.description.clone(),
            contact_info: s.contact_info.clone(),
            comment: s.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_supplier_is_normalized() {
        let s = Supplier::new_for_insert(" sp01 ", " pt  warna   jaya ", None);
        assert_eq!(s.base.code, "SP01");
        assert_eq!(s.base.description, "PT WARNA JAYA");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_supplier_requires_code() {
        let s = Supplier::new_for_insert("", "Name", None);
        assert!(s.validate().is_err());
    }
}
