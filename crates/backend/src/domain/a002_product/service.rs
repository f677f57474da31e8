use super::repository;
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a002_product::{Product, ProductDto, ProductListItem};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use contracts::shared::normalize::normalize_product_name;
use uuid::Uuid;

async fn ensure_unique(aggregate: &Product, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_name(aggregate.name()).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Product {} already exists",
                aggregate.name()
            )));
        }
    }
    if !aggregate.base.code.is_empty() {
        if let Some(existing) = repository::find_by_code(&aggregate.base.code).await? {
            if Some(existing.base.id.value()) != own_id {
                return Err(ServiceError::Conflict(format!(
                    "Product code {} already exists",
                    aggregate.base.code
                )));
            }
        }
    }
    Ok(())
}

pub async fn create(dto: ProductDto) -> ServiceResult<Uuid> {
    let mut aggregate = Product::new_for_insert(
        dto.code.as_deref().filter(|c| !c.trim().is_empty()),
        &dto.description,
        dto.unit.clone(),
        dto.account_ref.clone().filter(|a| !a.is_empty()),
    );
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_unique(&aggregate, None).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: ProductDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Product", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_unique(&aggregate, Some(id)).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &Product::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("Product", id))?;

    let used = repository::count_document_references(&id.to_string()).await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Product is used by {} documents",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &Product::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Product> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Product", id))
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

/// Page of products with account names and current average cost
pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<ProductListItem>> {
    let query = query.normalized();
    let (products, total) = repository::list_paginated(&query).await?;
    let accounts = crate::domain::a003_account::repository::name_map().await?;
    let costs = crate::projections::p901_product_avg_cost::repository::avg_cost_map().await?;

    let items = products
        .into_iter()
        .map(|p| {
            let id = p.to_string_id();
            ProductListItem {
                account_name: p.account_ref.as_ref().and_then(|a| accounts.get(a).cloned()),
                avg_cost: costs.get(&id).copied(),
                code: p.base.code,
                name: p.base.description,
                unit: p.unit,
                account_ref: p.account_ref,
                id,
            }
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Finds a product by normalized name or creates it; used by imports
pub async fn get_or_create(
    name: &str,
    unit: Option<String>,
    account_ref: Option<String>,
) -> anyhow::Result<(Uuid, bool)> {
    let normalized = normalize_product_name(name)
        .ok_or_else(|| anyhow::anyhow!("Product name is empty"))?;
    if let Some(existing) = repository::find_by_name(&normalized).await? {
        return Ok((existing.base.id.value(), false));
    }
    let mut aggregate = Product::new_for_insert(None, &normalized, unit, account_ref);
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    Ok((id, true))
}
