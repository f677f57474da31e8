pub mod audit;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod list;
pub mod logger;
