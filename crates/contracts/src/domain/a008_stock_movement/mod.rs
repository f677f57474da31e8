pub mod aggregate;

pub use aggregate::{
    StockMovement, StockMovementDto, StockMovementId, StockMovementLine, StockMovementListItem,
};
