use super::repository;
use crate::projections::p900_stock_ledger;
use crate::projections::p900_stock_ledger::repository::Registrator;
use crate::projections::p901_product_avg_cost;
use anyhow::Result;
use contracts::domain::a009_color_kitchen_batch::ConsumptionLine;
use contracts::projections::p900_stock_ledger::rules::batch_entries;
use contracts::projections::p900_stock_ledger::LedgerRefType;
use std::collections::HashMap;
use uuid::Uuid;

/// Fills `unit_cost_used` from average costs where it was left at 0, then refreshes totals
pub(crate) fn fill_missing_costs(lines: &mut [ConsumptionLine], costs: &HashMap<String, f64>) {
    for line in lines.iter_mut() {
        if line.unit_cost_used == 0.0 {
            line.unit_cost_used = costs.get(&line.product_ref).copied().unwrap_or(0.0);
        }
        line.recalculate();
    }
}

pub async fn post_document(id: Uuid) -> Result<()> {
    let mut document = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Document not found: {}", id))?;

    let costs = p901_product_avg_cost::repository::avg_cost_map().await?;
    fill_missing_costs(&mut document.dyes, &costs);
    document.base.metadata.is_posted = true;
    document.before_write();
    repository::update(&document).await?;

    let id_str = id.to_string();
    let registrator = Registrator {
        ref_type: LedgerRefType::Ck,
        id: &id_str,
        code: &document.base.code,
        date: &document.document_date,
    };
    p900_stock_ledger::service::post(&registrator, &batch_entries(&document)).await?;

    tracing::info!("Posted document a009: {} ({})", document.base.code, id);
    Ok(())
}

pub async fn unpost_document(id: Uuid) -> Result<()> {
    p900_stock_ledger::service::unpost(&id.to_string()).await?;
    repository::set_posted(id, false).await?;
    tracing::info!("Unposted document a009: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_missing_costs_keeps_manual_cost() {
        let mut lines = vec![
            ConsumptionLine {
                product_ref: "dye".into(),
                quantity: 2.0,
                unit_cost_used: 0.0,
                total_cost: 0.0,
            },
            ConsumptionLine {
                product_ref: "dye".into(),
                quantity: 1.0,
                unit_cost_used: 40.0,
                total_cost: 0.0,
            },
        ];
        let costs = HashMap::from([("dye".to_string(), 25.0)]);
        fill_missing_costs(&mut lines, &costs);
        assert_eq!(lines[0].unit_cost_used, 25.0);
        assert_eq!(lines[0].total_cost, 50.0);
        assert_eq!(lines[1].unit_cost_used, 40.0);
        assert_eq!(lines[1].total_cost, 40.0);
    }
}
