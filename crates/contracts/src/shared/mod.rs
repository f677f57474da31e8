pub mod audit;
pub mod list;
pub mod logger;
pub mod normalize;
pub mod parse;
