use crate::shared::components::{DateRangeFilter, PaginationControls, SearchBox};
use crate::shared::format::{format_qty, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::list_utils::PagedList;
use crate::shared::refs::{load_products, RefSelect};
use contracts::projections::p900_stock_ledger::{LedgerEntryDto, LedgerLocation, LedgerRefType};
use leptos::prelude::*;
use thaw::*;

pub const LOCATIONS: [LedgerLocation; 4] = [
    LedgerLocation::Gudang,
    LedgerLocation::Kitchen,
    LedgerLocation::Usage,
    LedgerLocation::Opname,
];

const REF_TYPES: [LedgerRefType; 4] = [
    LedgerRefType::Purchasing,
    LedgerRefType::StockMovement,
    LedgerRefType::Ck,
    LedgerRefType::StockOpname,
];

pub fn ref_type_label(ref_type: LedgerRefType) -> &'static str {
    match ref_type {
        LedgerRefType::Purchasing => "Purchasing",
        LedgerRefType::StockMovement => "Stock movement",
        LedgerRefType::Ck => "Color kitchen",
        LedgerRefType::StockOpname => "Stock opname",
    }
}

/// Read-only journal of stock movements per location
#[component]
pub fn StockLedgerList() -> impl IntoView {
    let list = PagedList::<LedgerEntryDto>::new("/api/p900_stock_ledger");
    let products = load_products();
    let filter_value = move |key: &'static str| {
        list.filters.with(|f| {
            f.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        })
    };

    list.fetch();

    view! {
        <div class="page">
            <div class="header">
                <h2>"Stock ledger"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| list.fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>
            <div class="toolbar">
                <SearchBox
                    placeholder="Document code"
                    on_search=Callback::new(move |q| list.set_search(q))
                />
                <RefSelect
                    refs=products
                    value=Signal::derive(move || filter_value("product_ref"))
                    on_change=Callback::new(move |v: String| list.set_filter("product_ref", Some(v)))
                    placeholder="All products"
                />
                <select
                    prop:value=move || filter_value("location")
                    on:change=move |ev| list.set_filter("location", Some(event_target_value(&ev)))
                >
                    <option value="">"All locations"</option>
                    {LOCATIONS
                        .iter()
                        .map(|l| view! { <option value=l.as_str()>{l.as_str()}</option> })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || filter_value("ref_type")
                    on:change=move |ev| list.set_filter("ref_type", Some(event_target_value(&ev)))
                >
                    <option value="">"All documents"</option>
                    {REF_TYPES
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{ref_type_label(*t)}</option> })
                        .collect_view()}
                </select>
                <DateRangeFilter
                    start=Signal::derive(move || list.query.with(|q| q.start_date.clone().unwrap_or_default()))
                    end=Signal::derive(move || list.query.with(|q| q.end_date.clone().unwrap_or_default()))
                    on_change=Callback::new(move |(s, e)| list.set_date_range(Some(s), Some(e)))
                />
            </div>

            {move || list.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Document"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"In"</th>
                            <th class="table__header-cell">"Out"</th>
                            <th class="table__header-cell">"Recorded"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|e| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{e.entry_date}</td>
                                            <td class="table__cell">{e.ref_code}</td>
                                            <td class="table__cell">{ref_type_label(e.registrator_type)}</td>
                                            <td class="table__cell">{e.location.as_str()}</td>
                                            <td class="table__cell">{e.product_name.unwrap_or(e.product_ref)}</td>
                                            <td class="table__cell table__cell--number">{format_qty(e.quantity_in)}</td>
                                            <td class="table__cell table__cell--number">{format_qty(e.quantity_out)}</td>
                                            <td class="table__cell">{format_timestamp(&e.created_at)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                page_size=Signal::derive(move || list.page_size())
                on_page_change=Callback::new(move |page| list.set_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
            />
        </div>
    }
}
