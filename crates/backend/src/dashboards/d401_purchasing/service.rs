use anyhow::Result;
use contracts::dashboards::common::{ratio, DateRangeQuery, Granularity};
use contracts::dashboards::d401_purchasing::{
    ProductInsights, ProductPurchase, PurchasingReportSummary, PurchasingTrend,
    PurchasingTrendPoint, SupplierInsights, SupplierShare, TrendQuery,
};
use contracts::domain::a007_purchasing::Purchasing;
use std::collections::{BTreeMap, HashMap};

use crate::dashboards::range_bounds;
use crate::domain::{a001_supplier, a002_product, a007_purchasing};

const TOP_N: usize = 5;

async fn load(range: &DateRangeQuery) -> Result<Vec<Purchasing>> {
    let (start, end) = range_bounds(range);
    a007_purchasing::repository::list_posted(start, end).await
}

fn document_value(doc: &Purchasing) -> f64 {
    doc.lines.iter().map(|l| l.value()).sum()
}

pub async fn get_summary(range: DateRangeQuery) -> Result<PurchasingReportSummary> {
    Ok(compute_summary(&load(&range).await?))
}

pub async fn get_trend(query: TrendQuery) -> Result<PurchasingTrend> {
    let range = DateRangeQuery {
        start_date: query.start_date.clone(),
        end_date: query.end_date.clone(),
    };
    Ok(compute_trend(&load(&range).await?, query.granularity()))
}

pub async fn get_supplier_insights(range: DateRangeQuery) -> Result<SupplierInsights> {
    let docs = load(&range).await?;
    let names = a001_supplier::repository::name_map().await?;
    Ok(compute_supplier_insights(&docs, &names))
}

pub async fn get_product_insights(range: DateRangeQuery) -> Result<ProductInsights> {
    let docs = load(&range).await?;
    let names = a002_product::repository::name_map().await?;
    Ok(compute_product_insights(&docs, &names))
}

pub fn compute_summary(docs: &[Purchasing]) -> PurchasingReportSummary {
    let mut summary = PurchasingReportSummary {
        document_count: docs.len() as u64,
        ..Default::default()
    };
    for doc in docs {
        let value = document_value(doc);
        summary.total_purchases += value;
        summary.total_quantity += doc.lines.iter().map(|l| l.quantity).sum::<f64>();
        summary.highest_purchase_value = summary.highest_purchase_value.max(value);
    }
    summary.avg_unit_cost = ratio(summary.total_purchases, summary.total_quantity);
    summary
}

pub fn compute_trend(docs: &[Purchasing], granularity: Granularity) -> PurchasingTrend {
    let mut points: BTreeMap<String, PurchasingTrendPoint> = BTreeMap::new();
    for doc in docs {
        let period = granularity.period_of(&doc.document_date);
        let point = points
            .entry(period.clone())
            .or_insert_with(|| PurchasingTrendPoint {
                period,
                ..Default::default()
            });
        point.value += document_value(doc);
        point.quantity += doc.lines.iter().map(|l| l.quantity).sum::<f64>();
        point.documents += 1;
    }
    PurchasingTrend {
        granularity,
        points: points.into_values().collect(),
    }
}

pub fn compute_supplier_insights(
    docs: &[Purchasing],
    names: &HashMap<String, String>,
) -> SupplierInsights {
    let mut by_supplier: HashMap<&str, (f64, u64)> = HashMap::new();
    for doc in docs {
        let slot = by_supplier.entry(doc.supplier_ref.as_str()).or_default();
        slot.0 += document_value(doc);
        slot.1 += 1;
    }
    let total: f64 = by_supplier.values().map(|(v, _)| v).sum();

    let mut shares: Vec<SupplierShare> = by_supplier
        .iter()
        .map(|(supplier_ref, (value, documents))| SupplierShare {
            supplier_ref: supplier_ref.to_string(),
            supplier_name: names.get(*supplier_ref).cloned().unwrap_or_default(),
            value: *value,
            documents: *documents,
            share: ratio(*value * 100.0, total),
        })
        .collect();
    shares.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.supplier_name.cmp(&b.supplier_name))
    });
    shares.truncate(TOP_N);

    SupplierInsights {
        unique_suppliers: by_supplier.len() as u64,
        top_suppliers: shares,
    }
}

pub fn compute_product_insights(
    docs: &[Purchasing],
    names: &HashMap<String, String>,
) -> ProductInsights {
    let mut by_product: HashMap<&str, (f64, f64)> = HashMap::new();
    for line in docs.iter().flat_map(|d| d.lines.iter()) {
        let slot = by_product.entry(line.product_ref.as_str()).or_default();
        slot.0 += line.quantity;
        slot.1 += line.value();
    }

    let products: Vec<ProductPurchase> = by_product
        .into_iter()
        .map(|(product_ref, (quantity, value))| ProductPurchase {
            product_ref: product_ref.to_string(),
            product_name: names.get(product_ref).cloned().unwrap_or_default(),
            quantity,
            value,
            avg_unit_cost: ratio(value, quantity),
        })
        .collect();

    let top_by = |key: fn(&ProductPurchase) -> f64| {
        let mut sorted = products.clone();
        sorted.sort_by(|a, b| {
            key(b)
                .total_cmp(&key(a))
                .then_with(|| a.product_name.cmp(&b.product_name))
        });
        sorted.truncate(TOP_N);
        sorted
    };

    ProductInsights {
        top_by_unit_cost: top_by(|p| p.avg_unit_cost),
        top_by_value: top_by(|p| p.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_purchasing::PurchasingLine;

    fn line(product: &str, quantity: f64, price: f64) -> PurchasingLine {
        PurchasingLine {
            product_ref: product.into(),
            quantity,
            price,
            ..Default::default()
        }
    }

    fn docs() -> Vec<Purchasing> {
        vec![
            Purchasing::new_for_insert(
                "A",
                "2025-07-01",
                "s1".into(),
                None,
                vec![line("p1", 10.0, 2.0), line("p2", 1.0, 50.0)],
            ),
            Purchasing::new_for_insert("B", "2025-07-20", "s2".into(), None, vec![line("p1", 5.0, 4.0)]),
            Purchasing::new_for_insert("C", "2025-08-03", "s1".into(), None, vec![line("p3", 2.0, 15.0)]),
        ]
    }

    #[test]
    fn test_summary() {
        let s = compute_summary(&docs());
        assert_eq!(s.total_purchases, 120.0);
        assert_eq!(s.total_quantity, 18.0);
        assert_eq!(s.highest_purchase_value, 70.0);
        assert_eq!(s.document_count, 3);
        assert!((s.avg_unit_cost - 120.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_by_month() {
        let t = compute_trend(&docs(), Granularity::Month);
        assert_eq!(t.points.len(), 2);
        assert_eq!(t.points[0].period, "2025-07");
        assert_eq!(t.points[0].value, 90.0);
        assert_eq!(t.points[0].documents, 2);
        assert_eq!(t.points[1].quantity, 2.0);
    }

    #[test]
    fn test_supplier_shares() {
        let names: HashMap<String, String> =
            [("s1".to_string(), "ALPHA".to_string())].into_iter().collect();
        let insights = compute_supplier_insights(&docs(), &names);
        assert_eq!(insights.unique_suppliers, 2);
        let top = &insights.top_suppliers[0];
        assert_eq!(top.supplier_name, "ALPHA");
        assert_eq!(top.value, 100.0);
        assert!((top.share - 100.0 * 100.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_product_insights() {
        let insights = compute_product_insights(&docs(), &HashMap::new());
        assert_eq!(insights.top_by_unit_cost[0].product_ref, "p2");
        assert_eq!(insights.top_by_value[0].product_ref, "p2");
        let p1 = insights
            .top_by_value
            .iter()
            .find(|p| p.product_ref == "p1")
            .unwrap();
        assert_eq!(p1.quantity, 15.0);
        assert!((p1.avg_unit_cost - 40.0 / 15.0).abs() < 1e-9);
    }
}
