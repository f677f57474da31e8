pub mod a001_supplier;
pub mod a002_product;
pub mod a003_account;
pub mod a004_account_parent;
pub mod a005_design_type;
pub mod a006_design;
pub mod a007_purchasing;
pub mod a008_stock_movement;
pub mod a009_color_kitchen_batch;
pub mod a010_color_kitchen_entry;
pub mod a011_stock_opname;
pub mod audit_log;
pub mod d400_overview;
pub mod d401_purchasing;
pub mod d402_color_kitchen;
pub mod logs;
pub mod p900_stock_ledger;
pub mod p901_product_avg_cost;
pub mod u501_import_purchasing;
pub mod u502_import_stock_movement;
pub mod u503_import_stock_opname;
pub mod u504_import_opening_balance;
pub mod u505_import_color_kitchen;
