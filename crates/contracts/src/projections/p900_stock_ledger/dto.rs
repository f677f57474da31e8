use serde::{Deserialize, Serialize};

/// Document type that produced a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerRefType {
    Purchasing,
    Ck,
    StockMovement,
    StockOpname,
}

impl LedgerRefType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerRefType::Purchasing => "purchasing",
            LedgerRefType::Ck => "ck",
            LedgerRefType::StockMovement => "stock_movement",
            LedgerRefType::StockOpname => "stock_opname",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "purchasing" => Some(LedgerRefType::Purchasing),
            "ck" => Some(LedgerRefType::Ck),
            "stock_movement" => Some(LedgerRefType::StockMovement),
            "stock_opname" => Some(LedgerRefType::StockOpname),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LedgerLocation {
    Gudang,
    Kitchen,
    Usage,
    Opname,
}

impl LedgerLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerLocation::Gudang => "gudang",
            LedgerLocation::Kitchen => "kitchen",
            LedgerLocation::Usage => "usage",
            LedgerLocation::Opname => "opname",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gudang" => Some(LedgerLocation::Gudang),
            "kitchen" => Some(LedgerLocation::Kitchen),
            "usage" => Some(LedgerLocation::Usage),
            "opname" => Some(LedgerLocation::Opname),
            _ => None,
        }
    }
}

/// Ledger entry derived from a document before it gets an id and a timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDraft {
    pub location: LedgerLocation,
    pub product_ref: String,
    pub quantity_in: f64,
    pub quantity_out: f64,
}

impl LedgerDraft {
    pub fn incoming(location: LedgerLocation, product_ref: &str, quantity: f64) -> Self {
        Self {
            location,
            product_ref: product_ref.to_string(),
            quantity_in: quantity,
            quantity_out: 0.0,
        }
    }

    pub fn outgoing(location: LedgerLocation, product_ref: &str, quantity: f64) -> Self {
        Self {
            location,
            product_ref: product_ref.to_string(),
            quantity_in: 0.0,
            quantity_out: quantity,
        }
    }
}

/// Stored ledger row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntryDto {
    pub id: String,
    pub registrator_ref: String,
    pub registrator_type: LedgerRefType,
    pub ref_code: String,
    pub entry_date: String,
    pub location: LedgerLocation,
    pub product_ref: String,
    pub product_name: Option<String>,
    pub quantity_in: f64,
    pub quantity_out: f64,
    pub created_at: String,
}

/// Filters of the ledger list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerListQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    /// Searches ref_code
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub product_ref: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ref_type: Option<String>,
}

impl LedgerListQuery {
    pub fn list_query(&self) -> crate::shared::list::ListQuery {
        crate::shared::list::ListQuery {
            page: self.page,
            page_size: self.page_size,
            q: self.q.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StockBalanceQuery {
    /// Inclusive cut-off date
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub product_ref: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Σin - Σout per product and location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockBalance {
    pub product_ref: String,
    pub product_name: Option<String>,
    pub location: LedgerLocation,
    pub quantity_in: f64,
    pub quantity_out: f64,
    pub balance: f64,
}
