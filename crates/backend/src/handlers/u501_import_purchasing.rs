use axum::extract::{Path, Query};
use axum::Json;
use contracts::usecases::common::WorkbookUpload;
use contracts::usecases::u501_import_purchasing::{
    CommitResponse, PreviewPage, PreviewPageQuery, PreviewSummary, UploadResponse,
};

use crate::shared::error::ServiceResult;
use crate::usecases::u501_import_purchasing::executor;

/// POST /api/u501/upload
pub async fn upload(Json(request): Json<WorkbookUpload>) -> ServiceResult<Json<UploadResponse>> {
    Ok(Json(executor::upload(request).await?))
}

/// GET /api/u501/preview/:session_id/summary
pub async fn summary(Path(session_id): Path<String>) -> ServiceResult<Json<PreviewSummary>> {
    Ok(Json(executor::summary(&session_id).await?))
}

/// GET /api/u501/preview/:session_id/:target?page&per_page
pub async fn preview(
    Path((session_id, target)): Path<(String, String)>,
    Query(query): Query<PreviewPageQuery>,
) -> ServiceResult<Json<PreviewPage>> {
    Ok(Json(executor::preview_page(&session_id, &target, query).await?))
}

/// POST /api/u501/commit/:session_id
pub async fn commit(Path(session_id): Path<String>) -> ServiceResult<Json<CommitResponse>> {
    Ok(Json(executor::commit(&session_id).await?))
}

/// DELETE /api/u501/:session_id
pub async fn discard(Path(session_id): Path<String>) -> ServiceResult<()> {
    executor::discard(&session_id).await
}
