mod dashboard;

pub use dashboard::PurchasingDashboard;
