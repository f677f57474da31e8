pub mod aggregate;

pub use aggregate::{Design, DesignDto, DesignId, DesignListItem};
