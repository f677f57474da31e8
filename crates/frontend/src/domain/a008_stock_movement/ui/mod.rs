pub mod details;
pub mod list;

pub use list::StockMovementList;
