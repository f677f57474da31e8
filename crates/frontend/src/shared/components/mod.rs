pub mod bar_chart;
pub mod consumption_lines;
pub mod date_range_filter;
pub mod form_field;
pub mod list_header;
pub mod pagination_controls;
pub mod posted_badge;
pub mod posting_actions;
pub mod search_box;
pub mod stat_card;
pub mod table_checkbox;

pub use bar_chart::BarChart;
pub use consumption_lines::ConsumptionLinesTable;
pub use date_range_filter::DateRangeFilter;
pub use form_field::{DateField, NumberCell, NumberField, TextAreaField, TextField};
pub use list_header::ListHeader;
pub use pagination_controls::PaginationControls;
pub use posted_badge::PostedBadge;
pub use posting_actions::PostingActions;
pub use search_box::SearchBox;
pub use stat_card::StatCard;
pub use table_checkbox::TableCheckbox;
