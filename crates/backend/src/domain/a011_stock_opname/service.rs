use super::{posting, repository};
use crate::shared::audit;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use contracts::domain::a011_stock_opname::{
    StockOpname, StockOpnameDto, StockOpnameListItem, SystemQuantity,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

pub async fn create(dto: StockOpnameDto) -> ServiceResult<Uuid> {
    let mut aggregate =
        StockOpname::new_for_insert(&dto.code, &dto.document_date, dto.lines.clone());
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    posting::post_document(id).await?;
    Ok(id)
}

pub async fn update(dto: StockOpnameDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Stock opname", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    posting::post_document(id).await?;
    audit::record(
        &StockOpname::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("Stock opname", id))?;

    repository::soft_delete(id).await?;
    posting::unpost_document(id).await?;
    audit::record(
        &StockOpname::full_name(),
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<StockOpname> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Stock opname", id))
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<StockOpnameListItem>> {
    let query = query.normalized();
    let (docs, total) = repository::list_paginated(&query).await?;
    let items = docs
        .into_iter()
        .map(|d| StockOpnameListItem {
            id: d.to_string_id(),
            line_count: d.lines.len(),
            total_difference: d.total_difference(),
            is_posted: d.base.metadata.is_posted,
            code: d.base.code,
            document_date: d.document_date,
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Warehouse balance of a product on `date` (today when omitted), used to prefill opname lines
pub async fn system_quantity(product_ref: &str, date: Option<String>) -> ServiceResult<SystemQuantity> {
    let product_id = parse_id(product_ref)?;
    if crate::domain::a002_product::repository::get_by_id(product_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::not_found("Product", product_id));
    }
    let date = date.filter(|d| !d.is_empty());
    let cut_off = date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let quantity =
        crate::projections::p900_stock_ledger::service::gudang_balance(product_ref, &cut_off)
            .await?;
    Ok(SystemQuantity {
        product_ref: product_ref.to_string(),
        date,
        quantity,
    })
}
