use super::repository;
use crate::projections::p900_stock_ledger;
use crate::projections::p900_stock_ledger::repository::Registrator;
use anyhow::Result;
use contracts::projections::p900_stock_ledger::rules::opname_entries;
use contracts::projections::p900_stock_ledger::LedgerRefType;
use uuid::Uuid;

pub async fn post_document(id: Uuid) -> Result<()> {
    let mut document = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Document not found: {}", id))?;

    document.base.metadata.is_posted = true;
    document.before_write();
    repository::update(&document).await?;

    let id_str = id.to_string();
    let registrator = Registrator {
        ref_type: LedgerRefType::StockOpname,
        id: &id_str,
        code: &document.base.code,
        date: &document.document_date,
    };
    p900_stock_ledger::service::post(&registrator, &opname_entries(&document)).await?;

    tracing::info!("Posted document a011: {} ({})", document.base.code, id);
    Ok(())
}

pub async fn unpost_document(id: Uuid) -> Result<()> {
    p900_stock_ledger::service::unpost(&id.to_string()).await?;
    repository::set_posted(id, false).await?;
    tracing::info!("Unposted document a011: {}", id);
    Ok(())
}
