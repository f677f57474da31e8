pub mod aggregate;

pub use aggregate::{
    ColorKitchenEntry, ColorKitchenEntryDto, ColorKitchenEntryId, ColorKitchenEntryListItem,
};
