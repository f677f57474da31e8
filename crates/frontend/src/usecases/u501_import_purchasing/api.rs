use crate::shared::api_utils::{delete, get_json, post_empty_json, post_json, query_string, with_query};
use contracts::usecases::common::WorkbookUpload;
use contracts::usecases::u501_import_purchasing::{
    CommitResponse, ImportTarget, PreviewPage, PreviewSummary, UploadResponse,
};

const BASE: &str = "/api/u501";

/// Stages every sheet of the workbook and opens a session
pub async fn upload(body: &WorkbookUpload) -> Result<UploadResponse, String> {
    post_json(&format!("{}/upload", BASE), body).await
}

pub async fn summary(session_id: &str) -> Result<PreviewSummary, String> {
    get_json(&format!("{}/preview/{}/summary", BASE, session_id)).await
}

/// One page of staged rows of `target`; `page` is 1-based
pub async fn preview_page(
    session_id: &str,
    target: ImportTarget,
    page: u64,
    per_page: u64,
) -> Result<PreviewPage, String> {
    let path = with_query(
        &format!("{}/preview/{}/{}", BASE, session_id, target.as_str()),
        &query_string(&[
            ("page", Some(page.to_string())),
            ("per_page", Some(per_page.to_string())),
        ]),
    );
    get_json(&path).await
}

pub async fn commit(session_id: &str) -> Result<CommitResponse, String> {
    post_empty_json(&format!("{}/commit/{}", BASE, session_id)).await
}

pub async fn discard(session_id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, session_id)).await
}
