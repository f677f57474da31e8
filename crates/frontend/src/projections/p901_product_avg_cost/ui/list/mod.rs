use crate::shared::api_utils::{get_json, post_empty_json};
use crate::shared::format::{format_amount, format_qty, format_timestamp};
use crate::shared::icons::icon;
use contracts::projections::p901_product_avg_cost::ProductAvgCostDto;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const ENDPOINT: &str = "/api/p901_product_avg_cost";

/// Case-insensitive product name filter
pub fn filter_rows(rows: &[ProductAvgCostDto], text: &str) -> Vec<ProductAvgCostDto> {
    let needle = text.trim().to_uppercase();
    rows.iter()
        .filter(|r| {
            needle.is_empty()
                || r.product_name
                    .as_deref()
                    .unwrap_or(&r.product_ref)
                    .to_uppercase()
                    .contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn ProductAvgCostList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<ProductAvgCostDto>::new());
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let fetch = move || {
        spawn_local(async move {
            match get_json::<Vec<ProductAvgCostDto>>(ENDPOINT).await {
                Ok(data) => {
                    rows.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let recompute = move |_: leptos::ev::MouseEvent| {
        busy.set(true);
        spawn_local(async move {
            match post_empty_json::<Vec<ProductAvgCostDto>>(&format!("{}/recompute", ENDPOINT)).await {
                Ok(data) => {
                    log::info!("average costs recomputed for {} products", data.len());
                    rows.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    fetch();

    let visible = move || rows.with(|r| filter_rows(r, &search.get()));

    view! {
        <div class="page">
            <div class="header">
                <h2>"Average cost"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || busy.get())
                        on_click=recompute
                    >
                        {icon("repeat")}
                        "Recompute"
                    </Button>
                </div>
            </div>
            <p class="muted">"Weighted average of posted purchasing lines: sum(qty x price) / sum(qty)."</p>
            <div class="toolbar">
                <Input value=search placeholder="Filter by product" />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Purchased qty"</th>
                            <th class="table__header-cell">"Purchased value"</th>
                            <th class="table__header-cell">"Average cost"</th>
                            <th class="table__header-cell">"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{r.product_name.unwrap_or(r.product_ref)}</td>
                                            <td class="table__cell table__cell--number">{format_qty(r.total_quantity)}</td>
                                            <td class="table__cell table__cell--number">{format_amount(r.total_value)}</td>
                                            <td class="table__cell table__cell--number">{format_amount(r.avg_cost)}</td>
                                            <td class="table__cell">{format_timestamp(&r.updated_at)}</td>
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

    fn row(name: Option<&str>, product_ref: &str) -> ProductAvgCostDto {
        ProductAvgCostDto {
            product_ref: product_ref.into(),
            product_name: name.map(str::to_string),
            total_quantity: 1.0,
            total_value: 1.0,
            avg_cost: 1.0,
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_filter_rows_matches_name_case_insensitive() {
        let rows = vec![row(Some("REACTIVE BLUE"), "p1"), row(Some("BINDER"), "p2"), row(None, "p3")];
        assert_eq!(filter_rows(&rows, "blue").len(), 1);
        assert_eq!(filter_rows(&rows, "  ").len(), 3);
        assert_eq!(filter_rows(&rows, "p3").len(), 1);
    }
}
