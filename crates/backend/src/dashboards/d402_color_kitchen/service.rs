use anyhow::Result;
use contracts::dashboards::common::{ratio, DateRangeQuery, Granularity};
use contracts::dashboards::d402_color_kitchen::{
    ChemicalKind, ChemicalUsage, ChemicalUsageRow, ColorKitchenSummary, KitchenTrendPoint,
    UsageQuery,
};
use contracts::domain::a009_color_kitchen_batch::{ColorKitchenBatch, ConsumptionLine};
use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntry;
use std::collections::{BTreeMap, HashMap};

use crate::dashboards::range_bounds;
use crate::domain::{a002_product, a009_color_kitchen_batch, a010_color_kitchen_entry};

async fn load(range: &DateRangeQuery) -> Result<(Vec<ColorKitchenBatch>, Vec<ColorKitchenEntry>)> {
    let (start, end) = range_bounds(range);
    Ok((
        a009_color_kitchen_batch::repository::list_posted(start, end).await?,
        a010_color_kitchen_entry::repository::list_posted(start, end).await?,
    ))
}

pub async fn get_summary(range: DateRangeQuery) -> Result<ColorKitchenSummary> {
    let (batches, entries) = load(&range).await?;
    Ok(compute_summary(&batches, &entries))
}

pub async fn get_usage(query: UsageQuery) -> Result<ChemicalUsage> {
    let range = DateRangeQuery {
        start_date: query.start_date.clone(),
        end_date: query.end_date.clone(),
    };
    let (batches, entries) = load(&range).await?;
    let kind = query.kind.as_deref().map(ChemicalKind::parse).unwrap_or_default();
    let names = a002_product::repository::name_map().await?;
    Ok(compute_usage(&batches, &entries, kind, &names))
}

pub async fn get_trend(range: DateRangeQuery) -> Result<Vec<KitchenTrendPoint>> {
    let (batches, entries) = load(&range).await?;
    Ok(compute_trend(&batches, &entries))
}

pub fn compute_summary(batches: &[ColorKitchenBatch], entries: &[ColorKitchenEntry]) -> ColorKitchenSummary {
    let total_dye_cost: f64 = batches.iter().map(ColorKitchenBatch::total_cost).sum();
    let total_aux_cost: f64 = entries.iter().map(ColorKitchenEntry::total_cost).sum();
    let total_cost = total_dye_cost + total_aux_cost;
    let total_rolls_processed: f64 = entries.iter().map(|e| e.rolls).sum();

    ColorKitchenSummary {
        total_cost,
        total_dye_cost,
        total_aux_cost,
        total_rolls_processed,
        avg_cost_per_roll: ratio(total_cost, total_rolls_processed),
        total_batches: batches.len() as u64,
        total_entries: entries.len() as u64,
        avg_cost_per_batch: ratio(total_dye_cost, batches.len() as f64),
        avg_cost_per_entry: ratio(total_aux_cost, entries.len() as f64),
    }
}

fn breakdown<'a>(
    lines: impl Iterator<Item = &'a ConsumptionLine>,
    names: &HashMap<String, String>,
) -> Vec<ChemicalUsageRow> {
    let mut by_product: HashMap<&str, (f64, f64)> = HashMap::new();
    for line in lines {
        let slot = by_product.entry(line.product_ref.as_str()).or_default();
        slot.0 += line.quantity;
        slot.1 += line.total_cost;
    }
    let mut rows: Vec<ChemicalUsageRow> = by_product
        .into_iter()
        .map(|(product_ref, (quantity, cost))| ChemicalUsageRow {
            product_ref: product_ref.to_string(),
            product_name: names.get(product_ref).cloned().unwrap_or_default(),
            quantity,
            cost,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.cost
            .total_cmp(&a.cost)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    rows
}

pub fn compute_usage(
    batches: &[ColorKitchenBatch],
    entries: &[ColorKitchenEntry],
    kind: ChemicalKind,
    names: &HashMap<String, String>,
) -> ChemicalUsage {
    let dyes = || batches.iter().flat_map(|b| b.dyes.iter());
    let auxiliaries = || entries.iter().flat_map(|e| e.auxiliaries.iter());

    ChemicalUsage {
        dye_quantity: dyes().map(|l| l.quantity).sum(),
        dye_cost: dyes().map(|l| l.total_cost).sum(),
        aux_quantity: auxiliaries().map(|l| l.quantity).sum(),
        aux_cost: auxiliaries().map(|l| l.total_cost).sum(),
        kind,
        breakdown: match kind {
            ChemicalKind::Dye => breakdown(dyes(), names),
            ChemicalKind::Aux => breakdown(auxiliaries(), names),
        },
    }
}

pub fn compute_trend(batches: &[ColorKitchenBatch], entries: &[ColorKitchenEntry]) -> Vec<KitchenTrendPoint> {
    let mut points: BTreeMap<String, KitchenTrendPoint> = BTreeMap::new();
    for batch in batches {
        let period = Granularity::Month.period_of(&batch.document_date);
        trend_point(&mut points, period).dye_cost += batch.total_cost();
    }
    for entry in entries {
        let period = Granularity::Month.period_of(&entry.document_date);
        let p = trend_point(&mut points, period);
        p.aux_cost += entry.total_cost();
        p.rolls += entry.rolls;
    }
    points.into_values().collect()
}

fn trend_point(points: &mut BTreeMap<String, KitchenTrendPoint>, period: String) -> &mut KitchenTrendPoint {
    points
        .entry(period.clone())
        .or_insert_with(|| KitchenTrendPoint {
            period,
            ..Default::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: &str, quantity: f64, unit_cost: f64) -> ConsumptionLine {
        ConsumptionLine {
            product_ref: product.into(),
            quantity,
            unit_cost_used: unit_cost,
            total_cost: quantity * unit_cost,
        }
    }

    fn fixture() -> (Vec<ColorKitchenBatch>, Vec<ColorKitchenEntry>) {
        let batches = vec![
            ColorKitchenBatch::new_for_insert("B1", "2025-07-01", vec![line("dye1", 2.0, 10.0)]),
            ColorKitchenBatch::new_for_insert(
                "B2",
                "2025-08-01",
                vec![line("dye1", 1.0, 10.0), line("dye2", 1.0, 20.0)],
            ),
        ];
        let mut entry = ColorKitchenEntry::new_for_insert("E1", "2025-08-05", "d1".into());
        entry.rolls = 4.0;
        entry.auxiliaries = vec![line("aux1", 5.0, 2.0)];
        (batches, vec![entry])
    }

    #[test]
    fn test_summary_averages() {
        let (batches, entries) = fixture();
        let s = compute_summary(&batches, &entries);
        assert_eq!(s.total_dye_cost, 50.0);
        assert_eq!(s.total_aux_cost, 10.0);
        assert_eq!(s.total_cost, 60.0);
        assert_eq!(s.avg_cost_per_roll, 15.0);
        assert_eq!(s.avg_cost_per_batch, 25.0);
        assert_eq!(s.avg_cost_per_entry, 10.0);
        assert_eq!(compute_summary(&[], &[]).avg_cost_per_roll, 0.0);
    }

    #[test]
    fn test_usage_breakdown_for_kind() {
        let (batches, entries) = fixture();
        let usage = compute_usage(&batches, &entries, ChemicalKind::Dye, &HashMap::new());
        assert_eq!(usage.dye_quantity, 4.0);
        assert_eq!(usage.aux_cost, 10.0);
        assert_eq!(usage.breakdown.len(), 2);
        assert_eq!(usage.breakdown[0].product_ref, "dye1");
        assert_eq!(usage.breakdown[0].cost, 30.0);

        let aux = compute_usage(&batches, &entries, ChemicalKind::Aux, &HashMap::new());
        assert_eq!(aux.breakdown[0].product_ref, "aux1");
    }

    #[test]
    fn test_monthly_trend() {
        let (batches, entries) = fixture();
        let trend = compute_trend(&batches, &entries);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].dye_cost, 20.0);
        assert_eq!(trend[1].dye_cost, 30.0);
        assert_eq!(trend[1].aux_cost, 10.0);
        assert_eq!(trend[1].rolls, 4.0);
    }
}
