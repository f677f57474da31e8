pub mod executor;
pub mod repository;
pub mod staging;
