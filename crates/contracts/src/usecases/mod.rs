pub mod common;
pub mod u501_import_purchasing;
pub mod u502_import_stock_movement;
pub mod u503_import_stock_opname;
pub mod u504_import_opening_balance;
pub mod u505_import_color_kitchen;
