use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::normalize::normalize_code;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Purchasing document identifier
    PurchasingId
);

/// Line of a purchasing document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PurchasingLine {
    /// Reference to a002_product
    pub product_ref: String,
    pub quantity: f64,
    /// Unit price before tax
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub ppn: f64,
    #[serde(default)]
    pub pph: f64,
    /// quantity * price - discount
    #[serde(default)]
    pub dpp: f64,
    /// (dpp + ppn) * rate
    #[serde(default)]
    pub subtotal: f64,
    /// Faktur pajak number
    #[serde(default)]
    pub tax_no: Option<String>,
    /// Rate to the base currency, 0 or empty means 1
    #[serde(default)]
    pub exchange_rate: f64,
}

impl PurchasingLine {
    pub fn rate(&self) -> f64 {
        if self.exchange_rate > 0.0 {
            self.exchange_rate
        } else {
            1.0
        }
    }

    pub fn calc_dpp(&self) -> f64 {
        self.quantity * self.price - self.discount
    }

    pub fn calc_subtotal(&self) -> f64 {
        (self.calc_dpp() + self.ppn) * self.rate()
    }

    /// Refreshes the derived columns
    pub fn recalculate(&mut self) {
        self.dpp = self.calc_dpp();
        self.subtotal = self.calc_subtotal();
    }

    /// Goods value used for average cost and reports
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Totals shown under the lines table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PurchasingSummary {
    pub total_items: usize,
    pub total_dpp: f64,
    pub total_ppn: f64,
    pub total_pph: f64,
    pub grand_total: f64,
}

impl PurchasingSummary {
    pub fn from_lines(lines: &[PurchasingLine]) -> Self {
        lines.iter().fold(
            Self {
                total_items: lines.len(),
                ..Default::default()
            },
            |mut acc, line| {
                acc.total_dpp += line.calc_dpp();
                acc.total_ppn += line.ppn;
                acc.total_pph += line.pph;
                acc.grand_total += line.calc_subtotal();
                acc
            },
        )
    }
}

/// Purchasing receipt; `code` is the No Bukti
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchasing {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchasingId>,

    /// YYYY-MM-DD
    pub document_date: String,
    pub purchase_order: Option<String>,
    /// Reference to a001_supplier
    pub supplier_ref: String,
    pub lines: Vec<PurchasingLine>,
}

impl Purchasing {
    pub fn new_for_insert(
        code: &str,
        document_date: &str,
        supplier_ref: String,
        purchase_order: Option<String>,
        lines: Vec<PurchasingLine>,
    ) -> Self {
        let code = normalize_code(code);
        let base = BaseAggregate::new(
            PurchasingId::new_v4(),
            code.clone(),
            format!("{} {}", code, document_date),
        );
        let mut doc = Self {
            base,
            document_date: document_date.to_string(),
            purchase_order: purchase_order.filter(|p| !p.trim().is_empty()),
            supplier_ref,
            lines,
        };
        doc.recalculate();
        doc
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn recalculate(&mut self) {
        for line in self.lines.iter_mut() {
            line.recalculate();
        }
    }

    pub fn summary(&self) -> PurchasingSummary {
        PurchasingSummary::from_lines(&self.lines)
    }

    /// Σ quantity * price
    pub fn goods_value(&self) -> f64 {
        self.lines.iter().map(PurchasingLine::value).sum()
    }

    pub fn update(&mut self, dto: &PurchasingDto) {
        self.base.code = normalize_code(&dto.code);
        self.base.description = format!("{} {}", self.base.code, dto.document_date);
        self.base.set_comment(dto.comment.clone());
        self.document_date = dto.document_date.clone();
        self.purchase_order = dto.purchase_order.clone().filter(|p| !p.trim().is_empty());
        self.supplier_ref = dto.supplier_ref.clone();
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
        if self.supplier_ref.trim().is_empty() {
            return Err("Supplier is required".into());
        }
        for (i, line) in self.lines.iter().enumerate() {
            if line.product_ref.trim().is_empty() {
                return Err(format!("Line {}: product is required", i + 1));
            }
            if line.quantity < 0.0 || line.price < 0.0 {
                return Err(format!("Line {}: quantity and price must not be negative", i + 1));
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
    Purchasing,
    PurchasingId,
    "a007",
    "purchasing",
    "Purchasing",
    "Purchasing"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PurchasingDto {
    pub id: Option<String>,
    pub code: String,
    pub document_date: String,
    pub purchase_order: Option<String>,
    pub supplier_ref: String,
    pub lines: Vec<PurchasingLine>,
    pub comment: Option<String>,
}

impl From<&Purchasing> for PurchasingDto {
    fn from(p: &Purchasing) -> Self {
        Self {
            id: Some(p.to_string_id()),
            code: p.base.code.clone(),
            document_date: p.document_date.clone(),
            purchase_order: p.purchase_order.clone(),
            supplier_ref: p.supplier_ref.clone(),
            lines: p.lines.clone(),
            comment: p.base.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasingListItem {
    pub id: String,
    pub code: String,
    pub document_date: String,
    pub purchase_order: Option<String>,
    pub supplier_ref: String,
    pub supplier_name: Option<String>,
    pub line_count: usize,
    pub grand_total: f64,
    pub is_posted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: f64, price: f64, discount: f64, ppn: f64, rate: f64) -> PurchasingLine {
        PurchasingLine {
            product_ref: "p".into(),
            quantity,
            price,
            discount,
            ppn,
            exchange_rate: rate,
            ..Default::default()
        }
    }

    #[test]
    fn test_line_derived_fields() {
        let mut l = line(10.0, 5000.0, 2000.0, 5280.0, 0.0);
        l.recalculate();
        assert_eq!(l.dpp, 48000.0);
        assert_eq!(l.subtotal, 53280.0);
    }

    #[test]
    fn test_exchange_rate_applies_to_subtotal() {
        let mut l = line(2.0, 10.0, 0.0, 2.2, 15000.0);
        l.recalculate();
        assert_eq!(l.dpp, 20.0);
        assert!((l.subtotal - 22.2 * 15000.0).abs() < 1e-6);
    }

    #[test]
    fn test_summary_totals() {
        let mut a = line(1.0, 100.0, 0.0, 11.0, 0.0);
        a.pph = 2.0;
        let b = line(2.0, 50.0, 10.0, 0.0, 0.0);
        let s = PurchasingSummary::from_lines(&[a, b]);
        assert_eq!(s.total_items, 2);
        assert_eq!(s.total_dpp, 190.0);
        assert_eq!(s.total_ppn, 11.0);
        assert_eq!(s.total_pph, 2.0);
        assert_eq!(s.grand_total, 201.0);
    }

    #[test]
    fn test_validate_requires_supplier_and_date() {
        let mut doc = Purchasing::new_for_insert("nb-1", "2025-07-01", String::new(), None, vec![]);
        assert!(doc.validate().is_err());
        doc.supplier_ref = "s".into();
        assert!(doc.validate().is_ok());
        doc.document_date = "01/07/2025".into();
        assert!(doc.validate().is_err());
    }
}
