use super::repository;
use crate::shared::audit;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use contracts::domain::a006_design::{Design, DesignDto, DesignListItem};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_valid_refs(aggregate: &Design, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_code(&aggregate.base.code).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Design {} already exists",
                aggregate.base.code
            )));
        }
    }
    let type_id = parse_id(&aggregate.design_type_ref)?;
    if crate::domain::a005_design_type::repository::get_by_id(type_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::Validation("Unknown design type".into()));
    }
    Ok(())
}

pub async fn create(dto: DesignDto) -> ServiceResult<Uuid> {
    let mut aggregate = Design::new_for_insert(&dto.code, dto.design_type_ref.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_valid_refs(&aggregate, None).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: DesignDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Design", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_valid_refs(&aggregate, Some(id)).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &Design::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("Design", id))?;

    let used =
        crate::domain::a010_color_kitchen_entry::repository::count_by_design(&id.to_string())
            .await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Design is used by {} CK entries",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &Design::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Design> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Design", id))
}

pub async fn list_all() -> anyhow::Result<Vec<Design>> {
    repository::list_all().await
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<DesignListItem>> {
    let query = query.normalized();
    let (designs, total) = repository::list_paginated(&query).await?;
    let types = crate::domain::a005_design_type::repository::name_map().await?;
    let items = designs
        .into_iter()
        .map(|d| DesignListItem {
            id: d.to_string_id(),
            design_type_name: types.get(&d.design_type_ref).cloned(),
            code: d.base.code,
            description: d.base.description,
            design_type_ref: d.design_type_ref,
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Finds a design by code or creates it under the given type; used by imports
pub async fn get_or_create(code: &str, design_type_ref: &str) -> anyhow::Result<(Uuid, bool)> {
    let mut aggregate = Design::new_for_insert(code, design_type_ref.to_string());
    if let Some(existing) = repository::find_by_code(&aggregate.base.code).await? {
        return Ok((existing.base.id.value(), false));
    }
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    Ok((id, true))
}
