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
