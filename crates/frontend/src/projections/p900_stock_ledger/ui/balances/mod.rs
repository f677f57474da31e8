use super::ledger::LOCATIONS;
use crate::shared::api_utils::{get_json, query_string, with_query};
use crate::shared::format::format_qty;
use crate::shared::icons::icon;
use crate::shared::refs::{load_products, RefSelect};
use chrono::Utc;
use contracts::projections::p900_stock_ledger::StockBalance;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Balances per product and location at a cut-off date
#[component]
pub fn StockBalanceList() -> impl IntoView {
    let date = RwSignal::new(Utc::now().date_naive().format("%Y-%m-%d").to_string());
    let product_ref = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let hide_zero = RwSignal::new(true);
    let rows = RwSignal::new(Vec::<StockBalance>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let products = load_products();

    let fetch = move || {
        let qs = query_string(&[
            ("date", Some(date.get_untracked())),
            ("product_ref", Some(product_ref.get_untracked())),
            ("location", Some(location.get_untracked())),
        ]);
        loading.set(true);
        spawn_local(async move {
            match get_json::<Vec<StockBalance>>(&with_query("/api/p900_stock_ledger/balances", &qs)).await {
                Ok(data) => {
                    rows.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    fetch();

    let visible = move || {
        rows.get()
            .into_iter()
            .filter(|r| !hide_zero.get() || r.balance.abs() > 1e-9)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>"Stock balances"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>
            <div class="toolbar">
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| {
                        date.set(event_target_value(&ev));
                        fetch();
                    }
                />
                <RefSelect
                    refs=products
                    value=product_ref
                    on_change=Callback::new(move |v| {
                        product_ref.set(v);
                        fetch();
                    })
                    placeholder="All products"
                />
                <select
                    prop:value=move || location.get()
                    on:change=move |ev| {
                        location.set(event_target_value(&ev));
                        fetch();
                    }
                >
                    <option value="">"All locations"</option>
                    {LOCATIONS
                        .iter()
                        .map(|l| view! { <option value=l.as_str()>{l.as_str()}</option> })
                        .collect_view()}
                </select>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || hide_zero.get()
                        on:change=move |ev| hide_zero.set(event_target_checked(&ev))
                    />
                    " Hide zero balances"
                </label>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="muted">"Loading..."</div> })}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"In"</th>
                            <th class="table__header-cell">"Out"</th>
                            <th class="table__header-cell">"Balance"</th>
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
                                            <td class="table__cell">{r.location.as_str()}</td>
                                            <td class="table__cell table__cell--number">{format_qty(r.quantity_in)}</td>
                                            <td class="table__cell table__cell--number">{format_qty(r.quantity_out)}</td>
                                            <td class="table__cell table__cell--number">
                                                <strong>{format_qty(r.balance)}</strong>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
            <div class="table__footer muted">{move || format!("{} row(s)", visible().len())}</div>
        </div>
    }
}
