use anyhow::Result;
use contracts::dashboards::common::{ratio, DateRangeQuery, Granularity};
use contracts::dashboards::d400_overview::{
    CostTrendPoint, OverviewResponse, ProductUsage, StockFlowPoint,
};
use contracts::domain::a007_purchasing::Purchasing;
use contracts::domain::a008_stock_movement::StockMovement;
use contracts::domain::a009_color_kitchen_batch::ColorKitchenBatch;
use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntry;
use std::collections::{BTreeMap, HashMap};

use crate::dashboards::range_bounds;
use crate::domain::{
    a002_product, a007_purchasing, a008_stock_movement, a009_color_kitchen_batch,
    a010_color_kitchen_entry,
};

const TOP_PRODUCTS: usize = 10;

/// Posted documents of the requested range
pub struct OverviewInput {
    pub purchases: Vec<Purchasing>,
    pub movements: Vec<StockMovement>,
    pub batches: Vec<ColorKitchenBatch>,
    pub entries: Vec<ColorKitchenEntry>,
}

pub async fn get_overview(range: DateRangeQuery) -> Result<OverviewResponse> {
    let (start, end) = range_bounds(&range);
    let input = OverviewInput {
        purchases: a007_purchasing::repository::list_posted(start, end).await?,
        movements: a008_stock_movement::repository::list_posted(start, end).await?,
        batches: a009_color_kitchen_batch::repository::list_posted(start, end).await?,
        entries: a010_color_kitchen_entry::repository::list_posted(start, end).await?,
    };
    let names = a002_product::repository::name_map().await?;
    Ok(compute_overview(&input, &names))
}

pub fn compute_overview(input: &OverviewInput, names: &HashMap<String, String>) -> OverviewResponse {
    let month = Granularity::Month;
    let mut flow: BTreeMap<String, StockFlowPoint> = BTreeMap::new();
    let mut trend: BTreeMap<String, CostTrendPoint> = BTreeMap::new();

    let mut total_purchasing = 0.0;
    for doc in &input.purchases {
        let point = flow_point(&mut flow, &month.period_of(&doc.document_date));
        for line in &doc.lines {
            total_purchasing += line.value();
            point.stock_in += line.quantity;
        }
    }

    let mut total_stock_used = 0.0;
    let mut usage: HashMap<&str, (f64, f64)> = HashMap::new();
    for doc in &input.movements {
        for line in &doc.lines {
            total_stock_used += line.total_cost();
            let slot = usage.entry(line.product_ref.as_str()).or_default();
            slot.0 += line.quantity;
            slot.1 += line.total_cost();
        }
    }

    let mut total_dye_cost = 0.0;
    for batch in &input.batches {
        let period = month.period_of(&batch.document_date);
        let cost = batch.total_cost();
        total_dye_cost += cost;
        trend_point(&mut trend, &period).dye_cost += cost;
        flow_point(&mut flow, &period).stock_used +=
            batch.dyes.iter().map(|l| l.quantity).sum::<f64>();
    }

    let mut total_aux_cost = 0.0;
    for entry in &input.entries {
        let period = month.period_of(&entry.document_date);
        let cost = entry.total_cost();
        total_aux_cost += cost;
        trend_point(&mut trend, &period).aux_cost += cost;
        flow_point(&mut flow, &period).stock_used +=
            entry.auxiliaries.iter().map(|l| l.quantity).sum::<f64>();
    }

    let total_production_cost = total_dye_cost + total_aux_cost;
    let total_jobs = input.entries.len() as u64;

    let mut most_used: Vec<ProductUsage> = usage
        .into_iter()
        .map(|(product_ref, (quantity, value))| ProductUsage {
            product_ref: product_ref.to_string(),
            product_name: names.get(product_ref).cloned().unwrap_or_default(),
            quantity,
            value,
        })
        .collect();
    most_used.sort_by(|a, b| {
        b.quantity
            .total_cmp(&a.quantity)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    most_used.truncate(TOP_PRODUCTS);

    OverviewResponse {
        total_purchasing,
        total_stock_used,
        total_dye_cost,
        total_aux_cost,
        total_production_cost,
        total_jobs,
        avg_cost_per_job: ratio(total_production_cost, total_jobs as f64),
        stock_flow: flow.into_values().collect(),
        cost_trend: trend.into_values().collect(),
        most_used_products: most_used,
    }
}

fn flow_point<'a>(flow: &'a mut BTreeMap<String, StockFlowPoint>, period: &str) -> &'a mut StockFlowPoint {
    flow.entry(period.to_string())
        .or_insert_with(|| StockFlowPoint {
            period: period.to_string(),
            ..Default::default()
        })
}

fn trend_point<'a>(trend: &'a mut BTreeMap<String, CostTrendPoint>, period: &str) -> &'a mut CostTrendPoint {
    trend
        .entry(period.to_string())
        .or_insert_with(|| CostTrendPoint {
            period: period.to_string(),
            ..Default::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_purchasing::PurchasingLine;
    use contracts::domain::a008_stock_movement::StockMovementLine;
    use contracts::domain::a009_color_kitchen_batch::ConsumptionLine;

    fn consumption(product: &str, quantity: f64, cost: f64) -> ConsumptionLine {
        let mut line = ConsumptionLine {
            product_ref: product.into(),
            quantity,
            unit_cost_used: cost,
            ..Default::default()
        };
        line.recalculate();
        line
    }

    fn input() -> OverviewInput {
        let purchase = Purchasing::new_for_insert(
            "PB-1",
            "2025-07-10",
            "s1".into(),
            None,
            vec![PurchasingLine {
                product_ref: "p1".into(),
                quantity: 10.0,
                price: 5.0,
                ..Default::default()
            }],
        );
        let movement = StockMovement::new_for_insert(
            "BK-1",
            "2025-07-11",
            vec![
                StockMovementLine {
                    product_ref: "p1".into(),
                    quantity: 4.0,
                    unit_cost_used: 5.0,
                },
                StockMovementLine {
                    product_ref: "p2".into(),
                    quantity: 6.0,
                    unit_cost_used: 1.0,
                },
            ],
        );
        let mut batch =
            ColorKitchenBatch::new_for_insert("CK-1", "2025-08-01", vec![consumption("p1", 2.0, 5.0)]);
        batch.recalculate();
        let mut entry = ColorKitchenEntry::new_for_insert("E-1", "2025-08-02", "d1".into());
        entry.auxiliaries = vec![consumption("p2", 3.0, 1.0)];
        entry.recalculate();

        OverviewInput {
            purchases: vec![purchase],
            movements: vec![movement],
            batches: vec![batch],
            entries: vec![entry],
        }
    }

    #[test]
    fn test_compute_overview_totals() {
        let names: HashMap<String, String> =
            [("p2".to_string(), "AUX".to_string())].into_iter().collect();
        let overview = compute_overview(&input(), &names);

        assert_eq!(overview.total_purchasing, 50.0);
        assert_eq!(overview.total_stock_used, 26.0);
        assert_eq!(overview.total_dye_cost, 10.0);
        assert_eq!(overview.total_aux_cost, 3.0);
        assert_eq!(overview.total_production_cost, 13.0);
        assert_eq!(overview.total_jobs, 1);
        assert_eq!(overview.avg_cost_per_job, 13.0);
        assert_eq!(overview.most_used_products[0].product_ref, "p2");
        assert_eq!(overview.most_used_products[0].product_name, "AUX");
    }

    #[test]
    fn test_compute_overview_monthly_series() {
        let overview = compute_overview(&input(), &HashMap::new());
        let periods: Vec<_> = overview.stock_flow.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, vec!["2025-07", "2025-08"]);
        assert_eq!(overview.stock_flow[0].stock_in, 10.0);
        assert_eq!(overview.stock_flow[1].stock_used, 5.0);
        assert_eq!(overview.cost_trend.len(), 1);
        assert_eq!(overview.cost_trend[0].dye_cost, 10.0);
        assert_eq!(overview.cost_trend[0].aux_cost, 3.0);
    }

    #[test]
    fn test_compute_overview_empty() {
        let empty = OverviewInput {
            purchases: vec![],
            movements: vec![],
            batches: vec![],
            entries: vec![],
        };
        let overview = compute_overview(&empty, &HashMap::new());
        assert_eq!(overview.avg_cost_per_job, 0.0);
        assert!(overview.stock_flow.is_empty());
    }
}
