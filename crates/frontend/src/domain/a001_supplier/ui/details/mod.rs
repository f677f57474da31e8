//! Supplier details form.
//!
//! - model.rs: API calls
//! - view_model.rs: form state and commands
//! - view.rs: markup

mod model;
mod view;
mod view_model;

pub use view::SupplierDetails;
