use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::{normalize_code, normalize_product_name};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Product identifier
    ProductId
);

/// Stock item: dye, auxiliary chemical or spare part.
///
/// `description` holds the normalized product name, which is unique.
/// `code` is optional; an empty string means "no code".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub unit: Option<String>,
    /// Reference to a003_account
    pub account_ref: Option<String>,
}

impl Product {
    pub fn new_for_insert(
        code: Option<&str>,
        name: &str,
        unit: Option<String>,
        account_ref: Option<String>,
    ) -> Self {
        let base = BaseAggregate::new(
            ProductId::new_v4(),
            code.map(normalize_code).unwrap_or_default(),
            normalize_product_name(name).unwrap_or_default(),
        );
        Self {
            base,
            unit: unit.map(|u| u.trim().to_uppercase()).filter(|u| !u.is_empty()),
            account_ref,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.base.code = dto.code.as_deref().map(normalize_code).unwrap_or_default();
        self.base.description = normalize_product_name(&dto.description).unwrap_or_default();
        self.base.set_comment(dto.comment.clone());
        self.unit = dto
            .unit
            .as_deref()
            .map(|u| u.trim().to_uppercase())
            .filter(|u| !u.is_empty());
        self.account_ref = dto.account_ref.clone().filter(|a| !a.is_empty());
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Product name is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Product, ProductId, "a002", "product", "Product", "Products");

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    /// Product name
    pub description: String,
    pub unit: Option<String>,
    pub account_ref: Option<String>,
    pub comment: Option<String>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.to_string_id()),
            code: Some(p.base.code.clone()).filter(|c| !c.is_empty()),
            description: p.base.description.clone(),
            unit: p.unit.clone(),
            account_ref: p.account_ref.clone(),
            comment: p.base.comment.clone(),
        }
    }
}

/// Product row for lists, with the account name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: String,
    pub code: String,
    pub name: String,
    pub unit: Option<String>,
    pub account_ref: Option<String>,
    pub account_name: Option<String>,
    pub avg_cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_and_unit_normalized() {
        let p = Product::new_for_insert(None, "reactive  blue", Some(" kg ".into()), None);
        assert_eq!(p.name(), "REACTIVE BLUE");
        assert_eq!(p.unit.as_deref(), Some("KG"));
        assert_eq!(p.base.code, "");
    }

    #[test]
    fn test_update_clears_blank_fields() {
        let mut p = Product::new_for_insert(Some("c1"), "x", Some("kg".into()), Some("acc".into()));
        p.update(&ProductDto {
            description: "y".into(),
            unit: Some("  ".into()),
            account_ref: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(p.name(), "Y");
        assert_eq!(p.unit, None);
        assert_eq!(p.account_ref, None);
        assert_eq!(p.base.code, "");
    }
}
