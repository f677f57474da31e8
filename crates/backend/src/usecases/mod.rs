pub mod u501_import_purchasing;
pub mod u502_import_stock_movement;
pub mod u503_import_stock_opname;
pub mod u504_import_opening_balance;
pub mod u505_import_color_kitchen;

use crate::shared::error::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use contracts::shared::parse::safe_date;

/// Date of the documents created by an import; today when not given
pub fn resolve_as_of_date(as_of_date: Option<&str>) -> ServiceResult<NaiveDate> {
    match as_of_date.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(chrono::Local::now().date_naive()),
        Some(raw) => safe_date(raw)
            .ok_or_else(|| ServiceError::Validation(format!("Invalid as_of_date: {}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_as_of_date() {
        assert_eq!(
            resolve_as_of_date(Some("2025-07-31")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
        );
        assert!(resolve_as_of_date(Some("soon")).is_err());
        assert!(resolve_as_of_date(Some("  ")).is_ok());
    }
}
