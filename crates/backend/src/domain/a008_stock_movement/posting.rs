use super::repository;
use crate::projections::p900_stock_ledger;
use crate::projections::p900_stock_ledger::repository::Registrator;
use crate::projections::p901_product_avg_cost;
use anyhow::Result;
use contracts::domain::a008_stock_movement::StockMovementLine;
use contracts::projections::p900_stock_ledger::rules::stock_movement_entries;
use contracts::projections::p900_stock_ledger::LedgerRefType;
use std::collections::HashMap;
use uuid::Uuid;

/// Captures the current average cost on every line
pub(crate) fn apply_avg_costs(lines: &mut [StockMovementLine], costs: &HashMap<String, f64>) {
    for line in lines.iter_mut() {
        line.unit_cost_used = costs.get(&line.product_ref).copied().unwrap_or(0.0);
    }
}

pub async fn post_document(id: Uuid) -> Result<()> {
    let mut document = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Document not found: {}", id))?;

    let costs = p901_product_avg_cost::repository::avg_cost_map().await?;
    apply_avg_costs(&mut document.lines, &costs);
    document.base.metadata.is_posted = true;
    document.before_write();
    repository::update(&document).await?;

    let id_str = id.to_string();
    let registrator = Registrator {
        ref_type: LedgerRefType::StockMovement,
        id: &id_str,
        code: &document.base.code,
        date: &document.document_date,
    };
    p900_stock_ledger::service::post(&registrator, &stock_movement_entries(&document)).await?;

    tracing::info!("Posted document a008: {} ({})", document.base.code, id);
    Ok(())
}

pub async fn unpost_document(id: Uuid) -> Result<()> {
    p900_stock_ledger::service::unpost(&id.to_string()).await?;
    repository::set_posted(id, false).await?;
    tracing::info!("Unposted document a008: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_avg_costs_overwrites_and_defaults_to_zero() {
        let mut lines = vec![
            StockMovementLine {
                product_ref: "a".into(),
                quantity: 2.0,
                unit_cost_used: 99.0,
            },
            StockMovementLine {
                product_ref: "b".into(),
                quantity: 1.0,
                unit_cost_used: 5.0,
            },
        ];
        let costs = HashMap::from([("a".to_string(), 12.5)]);
        apply_avg_costs(&mut lines, &costs);
        assert_eq!(lines[0].unit_cost_used, 12.5);
        assert_eq!(lines[1].unit_cost_used, 0.0);
    }
}
