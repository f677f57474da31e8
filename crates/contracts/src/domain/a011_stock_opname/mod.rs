pub mod aggregate;

pub use aggregate::{
    describe_difference, StockOpname, StockOpnameDto, StockOpnameId, StockOpnameLine,
    StockOpnameListItem, SystemQuantity, SystemQuantityQuery,
};
