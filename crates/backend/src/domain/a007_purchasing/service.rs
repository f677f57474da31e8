use super::{posting, repository};
use crate::shared::audit;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use contracts::domain::a007_purchasing::{Purchasing, PurchasingDto, PurchasingListItem};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

async fn ensure_supplier(aggregate: &Purchasing) -> ServiceResult<()> {
    let supplier_id = parse_id(&aggregate.supplier_ref)?;
    if crate::domain::a001_supplier::repository::get_by_id(supplier_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::Validation("Unknown supplier".into()));
    }
    Ok(())
}

/// Stores a new document and posts it
pub async fn create(dto: PurchasingDto) -> ServiceResult<Uuid> {
    let mut aggregate = Purchasing::new_for_insert(
        &dto.code,
        &dto.document_date,
        dto.supplier_ref.clone(),
        dto.purchase_order.clone(),
        dto.lines.clone(),
    );
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_supplier(&aggregate).await?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    posting::post_document(id).await?;
    Ok(id)
}

pub async fn update(dto: PurchasingDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Purchasing", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_supplier(&aggregate).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    posting::post_document(id).await?;
    audit::record(
        &Purchasing::full_name(),
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
        .ok_or_else(|| ServiceError::not_found("Purchasing", id))?;

    repository::soft_delete(id).await?;
    posting::unpost_document(id).await?;
    audit::record(
        &Purchasing::full_name(),
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<Purchasing> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Purchasing", id))
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<PurchasingListItem>> {
    let query = query.normalized();
    let (docs, total) = repository::list_paginated(&query).await?;
    let suppliers = crate::domain::a001_supplier::repository::name_map().await?;
    let items = docs
        .into_iter()
        .map(|d| {
            let summary = d.summary();
            PurchasingListItem {
                id: d.to_string_id(),
                supplier_name: suppliers.get(&d.supplier_ref).cloned(),
                code: d.base.code,
                document_date: d.document_date,
                purchase_order: d.purchase_order,
                supplier_ref: d.supplier_ref,
                line_count: summary.total_items,
                grand_total: summary.grand_total,
                is_posted: d.base.metadata.is_posted,
            }
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::{p900_stock_ledger, p901_product_avg_cost};
    use crate::shared::data::db::test_database;
    use contracts::domain::a007_purchasing::PurchasingLine;

    async fn supplier_and_product(tag: &str) -> (String, String) {
        let (supplier, _) = crate::domain::a001_supplier::service::get_or_create(
            &format!("SUP-{}", tag),
            "PT Warna",
        )
        .await
        .unwrap();
        let (product, _) = crate::domain::a002_product::service::get_or_create(
            &format!("dye {}", tag),
            Some("KG".into()),
            None,
        )
        .await
        .unwrap();
        (supplier.to_string(), product.to_string())
    }

    fn dto(code: &str, supplier_ref: &str, product_ref: &str, quantity: f64) -> PurchasingDto {
        PurchasingDto {
            code: code.into(),
            document_date: "2025-07-01".into(),
            supplier_ref: supplier_ref.into(),
            lines: vec![PurchasingLine {
                product_ref: product_ref.into(),
                quantity,
                price: 250.0,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_post_unpost_rewrites_ledger_and_avg_cost() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string();
        let (supplier, product) = supplier_and_product(&tag).await;

        let id = create(dto(&format!("PB-{}", tag), &supplier, &product, 10.0))
            .await
            .unwrap();
        let entries = p900_stock_ledger::service::entries_of(&id.to_string()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity_in, 10.0);
        assert_eq!(p901_product_avg_cost::service::avg_cost_of(&product).await.unwrap(), 250.0);

        // saving again replaces the entries instead of adding to them
        let mut changed = dto(&format!("PB-{}", tag), &supplier, &product, 4.0);
        changed.id = Some(id.to_string());
        update(changed).await.unwrap();
        let entries = p900_stock_ledger::service::entries_of(&id.to_string()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity_in, 4.0);

        unpost(id).await.unwrap();
        assert!(p900_stock_ledger::service::entries_of(&id.to_string())
            .await
            .unwrap()
            .is_empty());
        assert!(!get_by_id(id).await.unwrap().base.metadata.is_posted);
        assert_eq!(p901_product_avg_cost::service::avg_cost_of(&product).await.unwrap(), 0.0);

        post(id).await.unwrap();
        assert_eq!(
            p900_stock_ledger::service::entries_of(&id.to_string()).await.unwrap().len(),
            1
        );
        assert!(get_by_id(id).await.unwrap().base.metadata.is_posted);
    }

    #[tokio::test]
    async fn test_delete_removes_ledger_entries() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string();
        let (supplier, product) = supplier_and_product(&tag).await;

        let id = create(dto(&format!("PB-{}", tag), &supplier, &product, 3.0))
            .await
            .unwrap();
        delete(id).await.unwrap();

        assert!(p900_stock_ledger::service::entries_of(&id.to_string())
            .await
            .unwrap()
            .is_empty());
        assert!(matches!(get_by_id(id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_supplier_is_rejected() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string();
        let (_, product) = supplier_and_product(&tag).await;

        let result = create(dto(&format!("PB-{}", tag), &Uuid::new_v4().to_string(), &product, 1.0)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
