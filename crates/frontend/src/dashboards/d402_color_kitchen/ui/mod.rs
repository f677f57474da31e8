mod dashboard;

pub use dashboard::ColorKitchenDashboard;
