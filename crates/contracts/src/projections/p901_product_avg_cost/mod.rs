pub mod dto;

pub use dto::{compute_avg_costs, CostInput, ProductAvgCostDto};
