//! Tab management
//!
//! - `page`: wrapper that shows/hides the content of a tab
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
