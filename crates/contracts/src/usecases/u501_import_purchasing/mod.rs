pub mod request;
pub mod response;

pub use request::{ImportTarget, PreviewPageQuery, StagedStatus};
pub use response::{
    CommitCounts, CommitResponse, PreviewPage, PreviewSummary, SheetStageResult, StagedRowDto,
    TargetSummary, UploadResponse,
};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportPurchasing;

impl UseCaseMetadata for ImportPurchasing {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_purchasing"
    }

    fn display_name() -> &'static str {
        "Import purchasing report"
    }

    fn description() -> &'static str {
        "Stages accounts, suppliers, products and purchasing rows from the purchasing workbook, then commits them"
    }
}
