pub mod common;
pub mod d400_overview;
pub mod d401_purchasing;
pub mod d402_color_kitchen;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_purchasing::ui::PurchasingDashboard;
pub use d402_color_kitchen::ui::ColorKitchenDashboard;
