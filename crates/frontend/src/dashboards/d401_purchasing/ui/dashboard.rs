use crate::dashboards::common::{chart_series, DashboardRange};
use crate::dashboards::d401_purchasing::api;
use crate::shared::components::{BarChart, DateRangeFilter, StatCard};
use crate::shared::format::{format_amount, format_percent, format_qty};
use contracts::dashboards::d401_purchasing::{
    ProductInsights, ProductPurchase, PurchasingReportSummary, PurchasingTrend,
    PurchasingTrendPoint, SupplierInsights,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

const GRANULARITIES: [(&str, &str); 3] = [("day", "Day"), ("week", "Week"), ("month", "Month")];

/// Purchasing report: totals, spend over time, suppliers and products
#[component]
pub fn PurchasingDashboard() -> impl IntoView {
    let range = DashboardRange::this_year();
    let granularity = RwSignal::new("month".to_string());

    let summary = RwSignal::new(PurchasingReportSummary::default());
    let trend = RwSignal::new(PurchasingTrend::default());
    let suppliers = RwSignal::new(SupplierInsights::default());
    let products = RwSignal::new(ProductInsights::default());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let summary_path = range.path(api::SUMMARY, &[]);
        let suppliers_path = range.path(api::SUPPLIERS, &[]);
        let products_path = range.path(api::PRODUCTS, &[]);
        spawn_local(async move {
            let loaded = async {
                summary.set(api::get_summary(&summary_path).await?);
                suppliers.set(api::get_suppliers(&suppliers_path).await?);
                products.set(api::get_products(&products_path).await?);
                Ok::<_, String>(())
            };
            if let Err(e) = loaded.await {
                log::error!("failed to load purchasing report: {}", e);
                error.set(Some(e));
            }
        });
    });

    // Trend also depends on the granularity
    Effect::new(move |_| {
        let path = range.path(api::TREND, &[("granularity", Some(granularity.get()))]);
        spawn_local(async move {
            match api::get_trend(&path).await {
                Ok(t) => trend.set(t),
                Err(e) => {
                    log::error!("failed to load purchasing trend: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let chart = Memo::new(move |_| {
        trend.with(|t| {
            chart_series(&t.points, |p| p.period.clone(), &[&|p: &PurchasingTrendPoint| p.value])
        })
    });

    let product_rows = |rows: Vec<ProductPurchase>| {
        rows.into_iter()
            .map(|p| {
                view! {
                    <tr>
                        <td class="table__cell">{p.product_name}</td>
                        <td class="table__cell table__cell--number">{format_qty(p.quantity)}</td>
                        <td class="table__cell table__cell--number">{format_amount(p.avg_unit_cost)}</td>
                        <td class="table__cell table__cell--number">{format_amount(p.value)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>"Purchasing report"</h2>
                <DateRangeFilter
                    start=range.start
                    end=range.end
                    on_change=Callback::new(move |r| range.set(r))
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total purchases"
                    icon_name="shopping-cart"
                    value=Signal::derive(move || summary.with(|s| format_amount(s.total_purchases)))
                />
                <StatCard
                    label="Quantity"
                    icon_name="package"
                    value=Signal::derive(move || summary.with(|s| format_qty(s.total_quantity)))
                />
                <StatCard
                    label="Avg unit cost"
                    icon_name="dollar-sign"
                    value=Signal::derive(move || summary.with(|s| format_amount(s.avg_unit_cost)))
                />
                <StatCard
                    label="Highest purchase"
                    icon_name="activity"
                    value=Signal::derive(move || {
                        summary.with(|s| format_amount(s.highest_purchase_value))
                    })
                />
                <StatCard
                    label="Documents"
                    icon_name="file-text"
                    value=Signal::derive(move || summary.with(|s| s.document_count.to_string()))
                />
                <StatCard
                    label="Suppliers"
                    icon_name="truck"
                    value=Signal::derive(move || suppliers.with(|s| s.unique_suppliers.to_string()))
                />
            </div>

            <div class="chart-card">
                <div class="toolbar">
                    <span>"Group by"</span>
                    <select
                        prop:value=move || granularity.get()
                        on:change=move |ev| granularity.set(event_target_value(&ev))
                    >
                        {GRANULARITIES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <BarChart
                    title="Purchases"
                    labels=Signal::derive(move || chart.with(|c| c.0.clone()))
                    series=Signal::derive(move || chart.with(|c| c.1.clone()))
                />
            </div>

            <div class="chart-card">
                <h3>"Top suppliers"</h3>
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"Documents"</th>
                            <th class="table__header-cell">"Value"</th>
                            <th class="table__header-cell">"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            suppliers
                                .get()
                                .top_suppliers
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <tr>
                                            <td class="table__cell">{s.supplier_name}</td>
                                            <td class="table__cell table__cell--number">{s.documents}</td>
                                            <td class="table__cell table__cell--number">{format_amount(s.value)}</td>
                                            <td class="table__cell table__cell--number">{format_percent(s.share)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="chart-grid">
                <div class="chart-card">
                    <h3>"Highest unit cost"</h3>
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Avg unit cost"</th>
                                <th class="table__header-cell">"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || product_rows(products.get().top_by_unit_cost)}
                        </tbody>
                    </table>
                </div>
                <div class="chart-card">
                    <h3>"Highest spend"</h3>
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Avg unit cost"</th>
                                <th class="table__header-cell">"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || product_rows(products.get().top_by_value)}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
