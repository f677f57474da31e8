use crate::dashboards::common::{chart_series, DashboardRange};
use crate::dashboards::d402_color_kitchen::api;
use crate::shared::components::{BarChart, DateRangeFilter, StatCard};
use crate::shared::format::{format_amount, format_qty};
use contracts::dashboards::d402_color_kitchen::{
    ChemicalKind, ChemicalUsage, ColorKitchenSummary, KitchenTrendPoint,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn kind_param(kind: ChemicalKind) -> &'static str {
    match kind {
        ChemicalKind::Dye => "dye",
        ChemicalKind::Aux => "aux",
    }
}

/// Color kitchen costs: per roll, per batch and per chemical
#[component]
pub fn ColorKitchenDashboard() -> impl IntoView {
    let range = DashboardRange::this_month();
    let kind = RwSignal::new(ChemicalKind::Dye);

    let summary = RwSignal::new(ColorKitchenSummary::default());
    let usage = RwSignal::new(ChemicalUsage::default());
    let trend = RwSignal::new(Vec::<KitchenTrendPoint>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let summary_path = range.path(api::SUMMARY, &[]);
        let trend_path = range.path(api::TREND, &[]);
        spawn_local(async move {
            let loaded = async {
                summary.set(api::get_summary(&summary_path).await?);
                trend.set(api::get_trend(&trend_path).await?);
                Ok::<_, String>(())
            };
            if let Err(e) = loaded.await {
                log::error!("failed to load color kitchen report: {}", e);
                error.set(Some(e));
            }
        });
    });

    Effect::new(move |_| {
        let path = range.path(api::USAGE, &[("kind", Some(kind_param(kind.get()).to_string()))]);
        spawn_local(async move {
            match api::get_usage(&path).await {
                Ok(u) => usage.set(u),
                Err(e) => {
                    log::error!("failed to load chemical usage: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let costs = Memo::new(move |_| {
        trend.with(|points| {
            chart_series(
                points,
                |p| p.period.clone(),
                &[&|p: &KitchenTrendPoint| p.dye_cost, &|p: &KitchenTrendPoint| p.aux_cost],
            )
        })
    });
    let rolls = Memo::new(move |_| {
        trend.with(|points| chart_series(points, |p| p.period.clone(), &[&|p: &KitchenTrendPoint| p.rolls]))
    });

    let card = move |f: fn(&ColorKitchenSummary) -> String| Signal::derive(move || summary.with(f));
    let kind_button = move |k: ChemicalKind, label: &'static str| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=move || {
                    if kind.get() == k { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                }
                on_click=move |_| kind.set(k)
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>"Color kitchen"</h2>
                <DateRangeFilter
                    start=range.start
                    end=range.end
                    on_change=Callback::new(move |r| range.set(r))
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Total cost"
                    icon_name="dollar-sign"
                    value=card(|s| format_amount(s.total_cost))
                />
                <StatCard
                    label="Dye cost"
                    icon_name="droplet"
                    value=card(|s| format_amount(s.total_dye_cost))
                />
                <StatCard
                    label="Auxiliary cost"
                    icon_name="layers"
                    value=card(|s| format_amount(s.total_aux_cost))
                />
                <StatCard
                    label="Rolls processed"
                    icon_name="repeat"
                    value=card(|s| format_qty(s.total_rolls_processed))
                />
                <StatCard
                    label="Avg cost per roll"
                    icon_name="activity"
                    value=card(|s| format_amount(s.avg_cost_per_roll))
                />
                <StatCard
                    label="Batches"
                    icon_name="clipboard"
                    value=card(|s| s.total_batches.to_string())
                />
                <StatCard
                    label="Entries"
                    icon_name="check-square"
                    value=card(|s| s.total_entries.to_string())
                />
            </div>

            <div class="chart-card">
                <table class="table__data">
                    <tbody>
                        <tr>
                            <td class="table__cell">"Avg cost per batch"</td>
                            <td class="table__cell table__cell--number">{move || summary.with(|s| format_amount(s.avg_cost_per_batch))}</td>
                        </tr>
                        <tr>
                            <td class="table__cell">"Avg cost per entry"</td>
                            <td class="table__cell table__cell--number">{move || summary.with(|s| format_amount(s.avg_cost_per_entry))}</td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <div class="chart-grid">
                <BarChart
                    title="Chemical cost"
                    labels=Signal::derive(move || costs.with(|c| c.0.clone()))
                    series=Signal::derive(move || costs.with(|c| c.1.clone()))
                    legend=vec!["Dye", "Auxiliary"]
                />
                <BarChart
                    title="Rolls"
                    labels=Signal::derive(move || rolls.with(|c| c.0.clone()))
                    series=Signal::derive(move || rolls.with(|c| c.1.clone()))
                />
            </div>

            <div class="chart-card">
                <div class="toolbar">
                    <h3>"Chemical usage"</h3>
                    {kind_button(ChemicalKind::Dye, "Dyes")}
                    {kind_button(ChemicalKind::Aux, "Auxiliaries")}
                </div>
                <div class="muted">
                    {move || {
                        usage.with(|u| {
                            format!(
                                "Dyes: {} ({})  Auxiliaries: {} ({})",
                                format_qty(u.dye_quantity),
                                format_amount(u.dye_cost),
                                format_qty(u.aux_quantity),
                                format_amount(u.aux_cost),
                            )
                        })
                    }}
                </div>
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            usage
                                .get()
                                .breakdown
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td class="table__cell">{row.product_name}</td>
                                            <td class="table__cell table__cell--number">{format_qty(row.quantity)}</td>
                                            <td class="table__cell table__cell--number">{format_amount(row.cost)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_param_matches_backend_parse() {
        for kind in [ChemicalKind::Dye, ChemicalKind::Aux] {
            assert_eq!(ChemicalKind::parse(kind_param(kind)), kind);
        }
    }
}
