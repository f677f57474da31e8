use super::repository;
use crate::projections::p900_stock_ledger::repository::Registrator;
use crate::projections::{p900_stock_ledger, p901_product_avg_cost};
use anyhow::Result;
use contracts::projections::p900_stock_ledger::rules::purchasing_entries;
use contracts::projections::p900_stock_ledger::LedgerRefType;
use uuid::Uuid;

/// Rebuilds the ledger entries of the document and marks it posted, without touching average costs
pub async fn post_ledger(id: Uuid) -> Result<()> {
    let document = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Document not found: {}", id))?;

    let id_str = id.to_string();
    let registrator = Registrator {
        ref_type: LedgerRefType::Purchasing,
        id: &id_str,
        code: &document.base.code,
        date: &document.document_date,
    };
    p900_stock_ledger::service::post(&registrator, &purchasing_entries(&document)).await?;
    repository::set_posted(id, true).await?;

    tracing::info!("Posted document a007: {} ({})", document.base.code, id);
    Ok(())
}

/// Posts the document and refreshes average costs
pub async fn post_document(id: Uuid) -> Result<()> {
    post_ledger(id).await?;
    p901_product_avg_cost::service::recompute().await?;
    Ok(())
}

pub async fn unpost_document(id: Uuid) -> Result<()> {
    p900_stock_ledger::service::unpost(&id.to_string()).await?;
    repository::set_posted(id, false).await?;
    p901_product_avg_cost::service::recompute().await?;

    tracing::info!("Unposted document a007: {}", id);
    Ok(())
}
