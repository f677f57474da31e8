pub mod aggregate;

pub use aggregate::{DesignType, DesignTypeDto, DesignTypeId};
