//! Types shared between the backend and the browser client.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
