//! Common types for all usecases

pub mod usecase_metadata;
pub mod usecase_result;
pub mod workbook;

pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::{CreatedDocument, RowError};
pub use workbook::{
    find_header_row, normalize_header, row_is_blank, ColumnMap, SheetData, SheetRowsRequest,
    WorkbookUpload,
};
