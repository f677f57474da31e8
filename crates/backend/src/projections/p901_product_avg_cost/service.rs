use super::repository;
use anyhow::Result;
use contracts::projections::p901_product_avg_cost::{compute_avg_costs, ProductAvgCostDto};

/// Full recompute from every posted purchasing line
pub async fn recompute() -> Result<usize> {
    let inputs = crate::domain::a007_purchasing::repository::posted_cost_inputs().await?;
    let rows = compute_avg_costs(&inputs);
    repository::replace_all(&rows).await?;
    tracing::info!("Recomputed average cost for {} products", rows.len());
    Ok(rows.len())
}

pub async fn list() -> Result<Vec<ProductAvgCostDto>> {
    let names = crate::domain::a002_product::repository::name_map().await?;
    let rows = repository::list_all().await?;
    let mut items: Vec<ProductAvgCostDto> = rows
        .into_iter()
        .map(|m| ProductAvgCostDto {
            product_name: names.get(&m.product_ref).cloned(),
            product_ref: m.product_ref,
            total_quantity: m.total_quantity,
            total_value: m.total_value,
            avg_cost: m.avg_cost,
            updated_at: m.updated_at,
        })
        .collect();
    items.sort_by(|a, b| a.product_name.cmp(&b.product_name));
    Ok(items)
}

/// Average cost of a product, 0 when it was never purchased
pub async fn avg_cost_of(product_ref: &str) -> Result<f64> {
    Ok(repository::get(product_ref)
        .await?
        .map(|m| m.avg_cost)
        .unwrap_or(0.0))
}
