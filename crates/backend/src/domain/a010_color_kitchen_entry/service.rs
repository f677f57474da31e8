use super::{posting, repository};
use crate::shared::audit;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use contracts::domain::a010_color_kitchen_entry::{
    ColorKitchenEntry, ColorKitchenEntryDto, ColorKitchenEntryListItem,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_refs(aggregate: &ColorKitchenEntry) -> ServiceResult<()> {
    let design_id = parse_id(&aggregate.design_ref)?;
    if crate::domain::a006_design::repository::get_by_id(design_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::Validation("Unknown design".into()));
    }
    if let Some(batch_ref) = aggregate.batch_ref.as_deref() {
        let batch_id = parse_id(batch_ref)?;
        if crate::domain::a009_color_kitchen_batch::repository::get_by_id(batch_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Validation("Unknown CK batch".into()));
        }
    }
    Ok(())
}

pub async fn create(dto: ColorKitchenEntryDto) -> ServiceResult<Uuid> {
    let mut aggregate =
        ColorKitchenEntry::new_for_insert(&dto.code, &dto.document_date, dto.design_ref.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_refs(&aggregate).await?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    posting::post_document(id).await?;
    Ok(id)
}

pub async fn update(dto: ColorKitchenEntryDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("CK entry", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_refs(&aggregate).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    posting::post_document(id).await?;
    audit::record(
        &ColorKitchenEntry::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("CK entry", id))?;

    repository::soft_delete(id).await?;
    posting::unpost_document(id).await?;
    audit::record(
        &ColorKitchenEntry::full_name(),
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<ColorKitchenEntry> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("CK entry", id))
}

pub async fn list_paginated(
    query: ListQuery,
) -> anyhow::Result<ListResponse<ColorKitchenEntryListItem>> {
    let query = query.normalized();
    let (docs, total) = repository::list_paginated(&query).await?;
    let designs = crate::domain::a006_design::repository::code_map().await?;
    let batches = crate::domain::a009_color_kitchen_batch::repository::code_map().await?;
    let items = docs
        .into_iter()
        .map(|d| ColorKitchenEntryListItem {
            id: d.to_string_id(),
            design_code: designs.get(&d.design_ref).cloned(),
            batch_code: d.batch_ref.as_ref().and_then(|b| batches.get(b).cloned()),
            total_cost: d.total_cost(),
            is_posted: d.base.metadata.is_posted,
            code: d.base.code,
            document_date: d.document_date,
            rolls: d.rolls,
            paste_quantity: d.paste_quantity,
            design_ref: d.design_ref,
            batch_ref: d.batch_ref,
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}
