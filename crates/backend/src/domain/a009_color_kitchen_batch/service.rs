use super::{posting, repository};
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a009_color_kitchen_batch::{
    ColorKitchenBatch, ColorKitchenBatchDto, ColorKitchenBatchListItem,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use uuid::Uuid;

pub async fn create(dto: ColorKitchenBatchDto) -> ServiceResult<Uuid> {
    let mut aggregate =
        ColorKitchenBatch::new_for_insert(&dto.code, &dto.document_date, dto.dyes.clone());
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    posting::post_document(id).await?;
    Ok(id)
}

pub async fn update(dto: ColorKitchenBatchDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("CK batch", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    posting::post_document(id).await?;
    audit::record(
        &ColorKitchenBatch::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    Ok(())
}

/// Refused while CK entries point at the batch
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let existing = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("CK batch", id))?;

    let used =
        crate::domain::a010_color_kitchen_entry::repository::count_by_batch(&id.to_string())
            .await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Batch is used by {} entries",
            used
        )));
    }

    repository::soft_delete(id).await?;
    posting::unpost_document(id).await?;
    audit::record(
        &ColorKitchenBatch::full_name(),
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<ColorKitchenBatch> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("CK batch", id))
}

pub async fn list_all() -> anyhow::Result<Vec<ColorKitchenBatch>> {
    repository::list_all().await
}

pub async fn list_paginated(
    query: ListQuery,
) -> anyhow::Result<ListResponse<ColorKitchenBatchListItem>> {
    let query = query.normalized();
    let (docs, total) = repository::list_paginated(&query).await?;
    let usage = crate::domain::a010_color_kitchen_entry::repository::count_per_batch().await?;
    let items = docs
        .into_iter()
        .map(|d| {
            let id = d.to_string_id();
            ColorKitchenBatchListItem {
                entry_count: usage.get(&id).copied().unwrap_or(0),
                dye_count: d.dyes.len(),
                total_cost: d.total_cost(),
                is_posted: d.base.metadata.is_posted,
                code: d.base.code,
                document_date: d.document_date,
                id,
            }
        })
        .collect();
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a002_product, a005_design_type, a006_design, a010_color_kitchen_entry};
    use crate::projections::p900_stock_ledger;
    use crate::shared::data::db::test_database;
    use contracts::domain::a005_design_type::DesignTypeDto;
    use contracts::domain::a006_design::DesignDto;
    use contracts::domain::a009_color_kitchen_batch::ConsumptionLine;
    use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntryDto;

    async fn design(tag: &str) -> String {
        let type_id = a005_design_type::service::create(DesignTypeDto {
            description: format!("Rotary {}", tag),
            ..Default::default()
        })
        .await
        .unwrap();
        a006_design::service::create(DesignDto {
            code: format!("DS-{}", tag),
            design_type_ref: type_id.to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .to_string()
    }

    async fn batch(tag: &str) -> Uuid {
        let (dye, _) = a002_product::service::get_or_create(&format!("dye {}", tag), None, None)
            .await
            .unwrap();
        create(ColorKitchenBatchDto {
            code: format!("CK-{}", tag),
            document_date: "2025-07-02".into(),
            dyes: vec![ConsumptionLine {
                product_ref: dye.to_string(),
                quantity: 2.5,
                unit_cost_used: 40.0,
                ..Default::default()
            }],
            ..Default::default()
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_delete_batch_used_by_entries_is_conflict() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string();
        let batch_id = batch(&tag).await;
        let entry_id = a010_color_kitchen_entry::service::create(ColorKitchenEntryDto {
            code: format!("OPJ-{}", tag),
            document_date: "2025-07-02".into(),
            rolls: 3.0,
            paste_quantity: 12.0,
            design_ref: design(&tag).await,
            batch_ref: Some(batch_id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

        match delete(batch_id).await {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, "Batch is used by 1 entries")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert!(get_by_id(batch_id).await.unwrap().base.metadata.is_posted);
        assert_eq!(
            p900_stock_ledger::service::entries_of(&batch_id.to_string()).await.unwrap().len(),
            1
        );

        a010_color_kitchen_entry::service::delete(entry_id).await.unwrap();
        delete(batch_id).await.unwrap();
        assert!(p900_stock_ledger::service::entries_of(&batch_id.to_string())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_unpost_batch_keeps_document() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string();
        let batch_id = batch(&tag).await;

        unpost(batch_id).await.unwrap();
        let stored = get_by_id(batch_id).await.unwrap();
        assert!(!stored.base.metadata.is_posted);
        assert_eq!(stored.dyes[0].total_cost, 100.0);
        assert!(p900_stock_ledger::service::entries_of(&batch_id.to_string())
            .await
            .unwrap()
            .is_empty());
    }
}
