use super::{posting, repository};
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a008_stock_movement::{StockMovement, StockMovementDto, StockMovementListItem};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

pub async fn create(dto: StockMovementDto) -> ServiceResult<Uuid> {
    let mut aggregate =
        StockMovement::new_for_insert(&dto.code, &dto.document_date, dto.lines.clone());
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    posting::post_document(id).await?;
    Ok(id)
}

pub async fn update(dto: StockMovementDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Stock movement", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    posting::post_document(id).await?;
    audit::record(
        &StockMovement::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    Ok(())
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let existing = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Stock movement", id))?;

    repository::soft_delete(id).await?;
    posting::unpost_document(id).await?;
    audit::record(
        &StockMovement::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn post(id: Uuid) -> ServiceResult<()> {
    get_by_id(id).await?;
    Ok(posting::post_document(id).await?)
}

pub async fn unpost(id: Uuid) -> ServiceResult<()> {
    get_by_id(id).await?;
    Ok(posting::unpost_document(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<StockMovement> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Stock movement", id))
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<StockMovementListItem>> {
    let query = query.normalized();
    let (docs, total) = repository::list_paginated(&query).await?;
    let items = docs
        .into_iter()
        .map(|d| StockMovementListItem {
            id: d.to_string_id(),
            line_count: d.lines.len(),
            total_quantity: d.total_quantity(),
            total_cost: d.total_cost(),
            is_posted: d.base.metadata.is_posted,
            code: d.base.code,
            document_date: d.document_date,
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}
