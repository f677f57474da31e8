//! Titles of tabs and sidebar items.

/// Readable title for a tab key; unknown keys are shown as is
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "d400_overview" => "Overview",
        "d401_purchasing" => "Purchasing report",
        "d402_color_kitchen" => "Color kitchen report",

        "a001_supplier" => "Suppliers",
        "a002_product" => "Products",
        "a003_account" => "Accounts",
        "a004_account_parent" => "Account groups",
        "a004_account_board" => "Account categorization",
        "a005_design_type" => "Design types",
        "a006_design" => "Designs",
        "a007_purchasing" => "Purchasing",
        "a008_stock_movement" => "Stock movements",
        "a009_color_kitchen_batch" => "Color kitchen batches",
        "a010_color_kitchen_entry" => "Color kitchen entries",
        "a011_stock_opname" => "Stock opname",

        "u501_import_purchasing" => "Import purchasing report",
        "u502_import_stock_movement" => "Import stock movements",
        "u503_import_stock_opname" => "Import stock opname",
        "u504_import_opening_balance" => "Import opening balance",
        "u505_import_color_kitchen" => "Import color kitchen report",

        "p900_stock_ledger" => "Stock ledger",
        "p900_stock_balances" => "Stock balances",
        "p901_product_avg_cost" => "Average cost",

        "sys_logs" => "Application log",
        "sys_audit_log" => "Audit log",

        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a007_purchasing"), "Purchasing");
        assert_eq!(tab_label_for_key("whatever"), "whatever");
    }
}
