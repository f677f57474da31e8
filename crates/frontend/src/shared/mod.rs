pub mod api_utils;
pub mod client_log;
pub mod components;
pub mod excel;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod refs;
