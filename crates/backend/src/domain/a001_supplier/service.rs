use super::repository;
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a001_supplier::{Supplier, SupplierDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_code_free(code: &str, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_code(code).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Supplier code {} already exists",
                code
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: SupplierDto) -> ServiceResult<Uuid> {
    let mut aggregate = Supplier::new_for_insert(&dto.code, &dto.description, dto.contact_info);
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_code_free(&aggregate.base.code, None).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: SupplierDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Supplier", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_code_free(&aggregate.base.code, Some(id)).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &Supplier::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    Ok(())
}

/// Soft delete; refused while purchasing documents reference the supplier
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let existing = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Supplier", id))?;

    let used = crate::domain::a007_purchasing::repository::count_by_supplier(&id.to_string()).await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Supplier is used by {} purchasing documents",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &Supplier::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Supplier> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Supplier", id))
}

pub async fn list_all() -> anyhow::Result<Vec<Supplier>> {
    repository::list_all().await
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<Supplier>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Finds a supplier by code or creates it; used by imports
pub async fn get_or_create(code: &str, name: &str) -> anyhow::Result<(Uuid, bool)> {
    let code = contracts::shared::normalize::normalize_code(code);
    if let Some(existing) = repository::find_by_code(&code).await? {
        return Ok((existing.base.id.value(), false));
    }
    let mut aggregate = Supplier::new_for_insert(&code, name, None);
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    Ok((id, true))
}
