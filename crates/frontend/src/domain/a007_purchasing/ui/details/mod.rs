mod lines;
mod model;
mod view;
mod view_model;

pub use view::PurchasingDetails;
