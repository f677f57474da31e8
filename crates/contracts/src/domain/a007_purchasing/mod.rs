pub mod aggregate;

pub use aggregate::{
    Purchasing, PurchasingDto, PurchasingId, PurchasingLine, PurchasingListItem, PurchasingSummary,
};
