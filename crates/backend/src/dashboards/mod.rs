pub mod d400_overview;
pub mod d401_purchasing;
pub mod d402_color_kitchen;

use contracts::dashboards::common::DateRangeQuery;

pub(crate) fn range_bounds(range: &DateRangeQuery) -> (Option<&str>, Option<&str>) {
    (
        range.start_date.as_deref().filter(|s| !s.is_empty()),
        range.end_date.as_deref().filter(|s| !s.is_empty()),
    )
}
