use super::repository;
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a003_account::{Account, AccountDto, AccountType};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_no_free(account_no: i64, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_no(account_no).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Account number {} already exists",
                account_no
            )));
        }
    }
    Ok(())
}

async fn ensure_parent_exists(parent_ref: Option<&str>) -> ServiceResult<()> {
    let Some(parent_ref) = parent_ref else {
        return Ok(());
    };
    let parent_id = crate::shared::error::parse_id(parent_ref)?;
    crate::domain::a004_account_parent::repository::get_by_id(parent_id)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("Unknown account group: {}", parent_ref)))?;
    Ok(())
}

pub async fn create(dto: AccountDto) -> ServiceResult<Uuid> {
    let mut aggregate = Account::new_for_insert(dto.account_no, &dto.description, dto.account_type);
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_no_free(aggregate.account_no, None).await?;
    ensure_parent_exists(aggregate.parent_ref.as_deref()).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: AccountDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_no_free(aggregate.account_no, Some(id)).await?;
    ensure_parent_exists(aggregate.parent_ref.as_deref()).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &Account::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    Ok(())
}

/// Moves an account to another board column; `None` puts it back to "unassigned"
pub async fn set_parent(id: Uuid, parent_ref: Option<String>) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))?;
    let parent_ref = parent_ref.filter(|p| !p.is_empty());
    ensure_parent_exists(parent_ref.as_deref()).await?;

    let old = aggregate.clone();
    aggregate.parent_ref = parent_ref;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();
    repository::update(&aggregate).await?;

    audit::record(
        &Account::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    tracing::info!(
        "Account {} moved to group {:?}",
        aggregate.account_no,
        aggregate.parent_ref
    );
    Ok(())
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let existing = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))?;

    let used =
        crate::domain::a002_product::repository::count_by_accounts(&[id.to_string()]).await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Account is used by {} products",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &Account::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Account> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))
}

pub async fn list_all() -> anyhow::Result<Vec<Account>> {
    repository::list_all().await
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<Account>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Finds an account by number or creates it as Goods; used by imports
pub async fn get_or_create(account_no: i64, name: &str) -> anyhow::Result<(Uuid, bool)> {
    if let Some(existing) = repository::find_by_no(account_no).await? {
        return Ok((existing.base.id.value(), false));
    }
    let mut aggregate = Account::new_for_insert(account_no, name, AccountType::Goods);
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    Ok((id, true))
}
