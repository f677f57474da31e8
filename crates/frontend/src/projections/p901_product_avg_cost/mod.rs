pub mod ui;

pub use ui::list::ProductAvgCostList;
