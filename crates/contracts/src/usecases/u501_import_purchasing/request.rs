use crate::shared::list::MAX_PAGE;
use serde::{Deserialize, Serialize};

/// Table a staged row is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportTarget {
    Account,
    Product,
    Supplier,
    Purchasing,
}

impl ImportTarget {
    pub const ALL: [ImportTarget; 4] = [
        ImportTarget::Account,
        ImportTarget::Product,
        ImportTarget::Supplier,
        ImportTarget::Purchasing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportTarget::Account => "account",
            ImportTarget::Product => "product",
            ImportTarget::Supplier => "supplier",
            ImportTarget::Purchasing => "purchasing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StagedStatus {
    Valid,
    Skipped,
}

impl StagedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StagedStatus::Valid => "valid",
            StagedStatus::Skipped => "skipped",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s == "valid" {
            StagedStatus::Valid
        } else {
            StagedStatus::Skipped
        }
    }
}

pub const DEFAULT_PER_PAGE: u64 = 50;
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewPageQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
}

impl PreviewPageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_page_limits() {
        assert_eq!(PreviewPageQuery::default().per_page(), 50);
        let q = PreviewPageQuery {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(q.per_page(), 100);
        assert_eq!(q.page(), 1);
        let q = PreviewPageQuery {
            page: Some(u64::MAX),
            per_page: None,
        };
        assert_eq!(q.page(), MAX_PAGE);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!(ImportTarget::parse("supplier"), Some(ImportTarget::Supplier));
        assert_eq!(ImportTarget::parse("other"), None);
    }
}
