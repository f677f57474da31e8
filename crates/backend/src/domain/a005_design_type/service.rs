use super::repository;
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a005_design_type::{DesignType, DesignTypeDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_name_free(name: &str, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_name(name).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Design type {} already exists",
                name
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: DesignTypeDto) -> ServiceResult<Uuid> {
    let mut aggregate = DesignType::new_for_insert(&dto.description);
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_name_free(&aggregate.base.description, None).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: DesignTypeDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Design type", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_name_free(&aggregate.base.description, Some(id)).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &DesignType::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("Design type", id))?;

    let used = crate::domain::a006_design::repository::count_by_type(&id.to_string()).await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Design type is used by {} designs",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &DesignType::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<DesignType> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Design type", id))
}

pub async fn list_all() -> anyhow::Result<Vec<DesignType>> {
    repository::list_all().await
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<DesignType>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Finds a design type by normalized name or creates it; used by imports
pub async fn get_or_create(name: &str) -> anyhow::Result<(Uuid, bool)> {
    let mut aggregate = DesignType::new_for_insert(name);
    if let Some(existing) = repository::find_by_name(&aggregate.base.description).await? {
        return Ok((existing.base.id.value(), false));
    }
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    Ok((id, true))
}
