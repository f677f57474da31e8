//! Tab key to view mapping. Every key opened from the sidebar lands here.

use crate::dashboards::{ColorKitchenDashboard, OverviewDashboard, PurchasingDashboard};
use crate::domain::a001_supplier::ui::SupplierList;
use crate::domain::a002_product::ui::ProductList;
use crate::domain::a003_account::ui::AccountList;
use crate::domain::a004_account_parent::ui::{AccountBoard, AccountParentList};
use crate::domain::a005_design_type::ui::DesignTypeList;
use crate::domain::a006_design::ui::DesignList;
use crate::domain::a007_purchasing::ui::PurchasingList;
use crate::domain::a008_stock_movement::ui::StockMovementList;
use crate::domain::a009_color_kitchen_batch::ui::ColorKitchenBatchList;
use crate::domain::a010_color_kitchen_entry::ui::ColorKitchenEntryList;
use crate::domain::a011_stock_opname::ui::StockOpnameList;
use crate::projections::p900_stock_ledger::{StockBalanceList, StockLedgerList};
use crate::projections::p901_product_avg_cost::ProductAvgCostList;
use crate::system::{AuditLogList, LogViewer};
use crate::usecases::u501_import_purchasing::ImportPurchasingWizard;
use crate::usecases::u502_import_stock_movement::ImportStockMovementPage;
use crate::usecases::u503_import_stock_opname::ImportStockOpnamePage;
use crate::usecases::u504_import_opening_balance::ImportOpeningBalancePage;
use crate::usecases::u505_import_color_kitchen::ImportColorKitchenPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d401_purchasing" => view! { <PurchasingDashboard /> }.into_any(),
        "d402_color_kitchen" => view! { <ColorKitchenDashboard /> }.into_any(),

        "a001_supplier" => view! { <SupplierList /> }.into_any(),
        "a002_product" => view! { <ProductList /> }.into_any(),
        "a003_account" => view! { <AccountList /> }.into_any(),
        "a004_account_parent" => view! { <AccountParentList /> }.into_any(),
        "a004_account_board" => view! { <AccountBoard /> }.into_any(),
        "a005_design_type" => view! { <DesignTypeList /> }.into_any(),
        "a006_design" => view! { <DesignList /> }.into_any(),
        "a007_purchasing" => view! { <PurchasingList /> }.into_any(),
        "a008_stock_movement" => view! { <StockMovementList /> }.into_any(),
        "a009_color_kitchen_batch" => view! { <ColorKitchenBatchList /> }.into_any(),
        "a010_color_kitchen_entry" => view! { <ColorKitchenEntryList /> }.into_any(),
        "a011_stock_opname" => view! { <StockOpnameList /> }.into_any(),

        "u501_import_purchasing" => view! { <ImportPurchasingWizard /> }.into_any(),
        "u502_import_stock_movement" => view! { <ImportStockMovementPage /> }.into_any(),
        "u503_import_stock_opname" => view! { <ImportStockOpnamePage /> }.into_any(),
        "u504_import_opening_balance" => view! { <ImportOpeningBalancePage /> }.into_any(),
        "u505_import_color_kitchen" => view! { <ImportColorKitchenPage /> }.into_any(),

        "p900_stock_ledger" => view! { <StockLedgerList /> }.into_any(),
        "p900_stock_balances" => view! { <StockBalanceList /> }.into_any(),
        "p901_product_avg_cost" => view! { <ProductAvgCostList /> }.into_any(),

        "sys_logs" => view! { <LogViewer /> }.into_any(),
        "sys_audit_log" => view! { <AuditLogList /> }.into_any(),

        other => {
            log::warn!("unknown tab key '{}'", other);
            view! { <div class="muted">{format!("Unknown page: {}", other)}</div> }.into_any()
        }
    }
}
