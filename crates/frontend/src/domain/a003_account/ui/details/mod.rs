mod view;

pub use view::AccountDetails;
