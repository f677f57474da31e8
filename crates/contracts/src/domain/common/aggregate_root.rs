use super::EntityMetadata;

/// Aggregate root contract: instance accessors plus static naming data
/// used for table names, tab keys and UI titles.
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Index of the aggregate, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "supplier"
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    /// Full name, e.g. "a001_supplier". Also the table name and the tab key.
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Implements the instance part of `AggregateRoot` for a struct with a `base` field.
#[macro_export]
macro_rules! impl_aggregate_root {
    ($ty:ty, $id:ty, $index:literal, $collection:literal, $element:literal, $list:literal) => {
        impl $crate::domain::common::AggregateRoot for $ty {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.base.id
            }

            fn code(&self) -> &str {
                &self.base.code
            }

            fn description(&self) -> &str {
                &self.base.description
            }

            fn metadata(&self) -> &$crate::domain::common::EntityMetadata {
                &self.base.metadata
            }

            fn metadata_mut(&mut self) -> &mut $crate::domain::common::EntityMetadata {
                &mut self.base.metadata
            }

            fn aggregate_index() -> &'static str {
                $index
            }

            fn collection_name() -> &'static str {
                $collection
            }

            fn element_name() -> &'static str {
                $element
            }

            fn list_name() -> &'static str {
                $list
            }
        }
    };
}
