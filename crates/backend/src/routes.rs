use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Workbooks arrive as JSON cell grids and can be large
const UPLOAD_LIMIT_BYTES: usize = 64 * 1024 * 1024;

/// All API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Suppliers
        .route(
            "/api/a001_supplier",
            get(handlers::a001_supplier::list_paginated).post(handlers::a001_supplier::upsert),
        )
        .route("/api/a001_supplier/all", get(handlers::a001_supplier::list_all))
        .route(
            "/api/a001_supplier/:id",
            get(handlers::a001_supplier::get_by_id).delete(handlers::a001_supplier::delete),
        )
        // A002 Products
        .route(
            "/api/a002_product",
            get(handlers::a002_product::list_paginated).post(handlers::a002_product::upsert),
        )
        .route("/api/a002_product/all", get(handlers::a002_product::list_all))
        .route(
            "/api/a002_product/:id",
            get(handlers::a002_product::get_by_id).delete(handlers::a002_product::delete),
        )
        // A003 Accounts
        .route(
            "/api/a003_account",
            get(handlers::a003_account::list_paginated).post(handlers::a003_account::upsert),
        )
        .route("/api/a003_account/all", get(handlers::a003_account::list_all))
        .route(
            "/api/a003_account/:id",
            get(handlers::a003_account::get_by_id).delete(handlers::a003_account::delete),
        )
        .route("/api/a003_account/:id/parent", post(handlers::a003_account::set_parent))
        // A004 Account groups
        .route(
            "/api/a004_account_parent",
            get(handlers::a004_account_parent::list_paginated).post(handlers::a004_account_parent::upsert),
        )
        .route("/api/a004_account_parent/all", get(handlers::a004_account_parent::list_all))
        .route("/api/a004_account_parent/board", get(handlers::a004_account_parent::board))
        .route(
            "/api/a004_account_parent/:id",
            get(handlers::a004_account_parent::get_by_id).delete(handlers::a004_account_parent::delete),
        )
        // A005 Design types
        .route(
            "/api/a005_design_type",
            get(handlers::a005_design_type::list_paginated).post(handlers::a005_design_type::upsert),
        )
        .route("/api/a005_design_type/all", get(handlers::a005_design_type::list_all))
        .route(
            "/api/a005_design_type/:id",
            get(handlers::a005_design_type::get_by_id).delete(handlers::a005_design_type::delete),
        )
        // A006 Designs
        .route(
            "/api/a006_design",
            get(handlers::a006_design::list_paginated).post(handlers::a006_design::upsert),
        )
        .route("/api/a006_design/all", get(handlers::a006_design::list_all))
        .route(
            "/api/a006_design/:id",
            get(handlers::a006_design::get_by_id).delete(handlers::a006_design::delete),
        )
        // A007 Purchasing
        .route(
            "/api/a007_purchasing",
            get(handlers::a007_purchasing::list_paginated).post(handlers::a007_purchasing::upsert),
        )
        .route(
            "/api/a007_purchasing/:id",
            get(handlers::a007_purchasing::get_by_id).delete(handlers::a007_purchasing::delete),
        )
        .route("/api/a007_purchasing/:id/post", post(handlers::a007_purchasing::post))
        .route("/api/a007_purchasing/:id/unpost", post(handlers::a007_purchasing::unpost))
        // A008 Stock movements
        .route(
            "/api/a008_stock_movement",
            get(handlers::a008_stock_movement::list_paginated).post(handlers::a008_stock_movement::upsert),
        )
        .route(
            "/api/a008_stock_movement/:id",
            get(handlers::a008_stock_movement::get_by_id).delete(handlers::a008_stock_movement::delete),
        )
        .route("/api/a008_stock_movement/:id/post", post(handlers::a008_stock_movement::post))
        .route("/api/a008_stock_movement/:id/unpost", post(handlers::a008_stock_movement::unpost))
        // A009 Color kitchen batches
        .route(
            "/api/a009_color_kitchen_batch",
            get(handlers::a009_color_kitchen_batch::list_paginated).post(handlers::a009_color_kitchen_batch::upsert),
        )
        .route("/api/a009_color_kitchen_batch/all", get(handlers::a009_color_kitchen_batch::list_all))
        .route(
            "/api/a009_color_kitchen_batch/:id",
            get(handlers::a009_color_kitchen_batch::get_by_id).delete(handlers::a009_color_kitchen_batch::delete),
        )
        .route("/api/a009_color_kitchen_batch/:id/post", post(handlers::a009_color_kitchen_batch::post))
        .route("/api/a009_color_kitchen_batch/:id/unpost", post(handlers::a009_color_kitchen_batch::unpost))
        // A010 Color kitchen entries
        .route(
            "/api/a010_color_kitchen_entry",
            get(handlers::a010_color_kitchen_entry::list_paginated).post(handlers::a010_color_kitchen_entry::upsert),
        )
        .route(
            "/api/a010_color_kitchen_entry/:id",
            get(handlers::a010_color_kitchen_entry::get_by_id).delete(handlers::a010_color_kitchen_entry::delete),
        )
        .route("/api/a010_color_kitchen_entry/:id/post", post(handlers::a010_color_kitchen_entry::post))
        .route("/api/a010_color_kitchen_entry/:id/unpost", post(handlers::a010_color_kitchen_entry::unpost))
        // A011 Stock opname
        .route(
            "/api/a011_stock_opname",
            get(handlers::a011_stock_opname::list_paginated).post(handlers::a011_stock_opname::upsert),
        )
        .route(
            "/api/a011_stock_opname/system_quantity/:product_ref",
            get(handlers::a011_stock_opname::system_quantity),
        )
        .route(
            "/api/a011_stock_opname/:id",
            get(handlers::a011_stock_opname::get_by_id).delete(handlers::a011_stock_opname::delete),
        )
        .route("/api/a011_stock_opname/:id/post", post(handlers::a011_stock_opname::post))
        .route("/api/a011_stock_opname/:id/unpost", post(handlers::a011_stock_opname::unpost))
        // P900 Stock ledger
        .route(
            "/api/p900_stock_ledger",
            get(handlers::p900_stock_ledger::list),
        )
        .route(
            "/api/p900_stock_ledger/balances",
            get(handlers::p900_stock_ledger::balances),
        )
        // P901 Average cost
        .route(
            "/api/p901_product_avg_cost",
            get(handlers::p901_product_avg_cost::list),
        )
        .route(
            "/api/p901_product_avg_cost/recompute",
            post(handlers::p901_product_avg_cost::recompute),
        )
        // U501 Purchasing report import
        .route(
            "/api/u501/upload",
            post(handlers::u501_import_purchasing::upload)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u501/preview/:session_id/summary",
            get(handlers::u501_import_purchasing::summary),
        )
        .route(
            "/api/u501/preview/:session_id/:target",
            get(handlers::u501_import_purchasing::preview),
        )
        .route(
            "/api/u501/commit/:session_id",
            post(handlers::u501_import_purchasing::commit),
        )
        .route(
            "/api/u501/:session_id",
            axum::routing::delete(handlers::u501_import_purchasing::discard),
        )
        // U502-U505 single sheet imports
        .route(
            "/api/u502/import",
            post(handlers::u502_import_stock_movement::import)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u503/preview",
            post(handlers::u503_import_stock_opname::preview)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u503/import",
            post(handlers::u503_import_stock_opname::import)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u504/import",
            post(handlers::u504_import_opening_balance::import)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u505/import",
            post(handlers::u505_import_color_kitchen::import)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        // D400-D402 Dashboards
        .route(
            "/api/d400_overview",
            get(handlers::d400_overview::get_overview),
        )
        .route(
            "/api/d401_purchasing/summary",
            get(handlers::d401_purchasing::summary),
        )
        .route(
            "/api/d401_purchasing/trend",
            get(handlers::d401_purchasing::trend),
        )
        .route(
            "/api/d401_purchasing/suppliers",
            get(handlers::d401_purchasing::suppliers),
        )
        .route(
            "/api/d401_purchasing/products",
            get(handlers::d401_purchasing::products),
        )
        .route(
            "/api/d402_color_kitchen/summary",
            get(handlers::d402_color_kitchen::summary),
        )
        .route(
            "/api/d402_color_kitchen/usage",
            get(handlers::d402_color_kitchen::usage),
        )
        .route(
            "/api/d402_color_kitchen/trend",
            get(handlers::d402_color_kitchen::trend),
        )
        // System
        .route(
            "/api/logs",
            get(handlers::logs::list)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .route("/api/audit_log", get(handlers::audit_log::list))
}
