/// Identification data of a usecase, used for routes, tabs and log sources
pub trait UseCaseMetadata {
    /// e.g. "u501"
    fn usecase_index() -> &'static str;

    /// e.g. "import_purchasing"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_import_purchasing"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
