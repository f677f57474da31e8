use crate::dashboards::common::{chart_series, DashboardRange};
use crate::dashboards::d400_overview::api;
use crate::shared::components::{BarChart, DateRangeFilter, StatCard};
use crate::shared::format::{format_amount, format_qty};
use contracts::dashboards::d400_overview::{CostTrendPoint, OverviewResponse, StockFlowPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Company wide totals, stock flow and chemical cost trend
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let range = DashboardRange::this_year();
    let (data, set_data) = signal(OverviewResponse::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Reload whenever the range changes
    Effect::new(move |_| {
        let path = range.path(api::API_BASE, &[]);
        set_loading.set(true);
        spawn_local(async move {
            match api::get_overview(&path).await {
                Ok(response) => {
                    set_data.set(response);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load overview: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let card = move |f: fn(&OverviewResponse) -> String| Signal::derive(move || data.with(f));

    let flow = Memo::new(move |_| {
        data.with(|d| {
            chart_series(
                &d.stock_flow,
                |p| p.period.clone(),
                &[&|p: &StockFlowPoint| p.stock_in, &|p: &StockFlowPoint| p.stock_used],
            )
        })
    });
    let costs = Memo::new(move |_| {
        data.with(|d| {
            chart_series(
                &d.cost_trend,
                |p| p.period.clone(),
                &[&|p: &CostTrendPoint| p.dye_cost, &|p: &CostTrendPoint| p.aux_cost],
            )
        })
    });

    view! {
        <div class="page">
            <div class="header">
                <h2>"Overview"</h2>
                <DateRangeFilter
                    start=range.start
                    end=range.end
                    on_change=Callback::new(move |r| range.set(r))
                />
                <Show when=move || loading.get()>
                    <span class="muted">"Loading..."</span>
                </Show>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total purchasing"
                    icon_name="shopping-cart"
                    value=card(|d| format_amount(d.total_purchasing))
                />
                <StatCard
                    label="Stock used"
                    icon_name="package"
                    value=card(|d| format_amount(d.total_stock_used))
                    subtitle="Value moved to the kitchen"
                />
                <StatCard
                    label="Dye cost"
                    icon_name="droplet"
                    value=card(|d| format_amount(d.total_dye_cost))
                />
                <StatCard
                    label="Auxiliary cost"
                    icon_name="layers"
                    value=card(|d| format_amount(d.total_aux_cost))
                />
                <StatCard
                    label="Production cost"
                    icon_name="dollar-sign"
                    value=card(|d| format_amount(d.total_production_cost))
                />
                <StatCard
                    label="Jobs"
                    icon_name="clipboard"
                    value=card(|d| d.total_jobs.to_string())
                />
                <StatCard
                    label="Avg cost per job"
                    icon_name="activity"
                    value=card(|d| format_amount(d.avg_cost_per_job))
                />
            </div>

            <div class="chart-grid">
                <BarChart
                    title="Stock flow"
                    labels=Signal::derive(move || flow.with(|f| f.0.clone()))
                    series=Signal::derive(move || flow.with(|f| f.1.clone()))
                    legend=vec!["In", "Used"]
                />
                <BarChart
                    title="Chemical cost"
                    labels=Signal::derive(move || costs.with(|c| c.0.clone()))
                    series=Signal::derive(move || costs.with(|c| c.1.clone()))
                    legend=vec!["Dye", "Auxiliary"]
                />
            </div>

            <div class="chart-card">
                <h3>"Most used products"</h3>
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            data.with(|d| {
                                d.most_used_products
                                    .iter()
                                    .map(|p| {
                                        view! {
                                            <tr>
                                                <td class="table__cell">{p.product_name.clone()}</td>
                                                <td class="table__cell table__cell--number">{format_qty(p.quantity)}</td>
                                                <td class="table__cell table__cell--number">{format_amount(p.value)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
