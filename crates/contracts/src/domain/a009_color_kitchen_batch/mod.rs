pub mod aggregate;

pub use aggregate::{
    ColorKitchenBatch, ColorKitchenBatchDto, ColorKitchenBatchId, ColorKitchenBatchListItem,
    ConsumptionLine,
};
