mod view;

pub use view::DesignTypeDetails;
