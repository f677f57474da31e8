use crate::domain::a011_stock_opname::ui::details::StockOpnameDetails;
use crate::shared::components::{
    DateRangeFilter, ListHeader, PaginationControls, PostedBadge, SearchBox, TableCheckbox,
};
use crate::shared::format::format_qty;
use crate::shared::list_utils::PagedList;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a011_stock_opname::StockOpnameListItem;
use leptos::prelude::*;

#[component]
pub fn StockOpnameList() -> impl IntoView {
    let list = PagedList::<StockOpnameListItem>::new("/api/a011_stock_opname");
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |id: Option<String>| {
        modal_stack.push_with_frame(Some("width: min(1000px, 98vw);".to_string()), move |handle| {
            let on_saved = Callback::new({
                let handle = handle.clone();
                move |_| {
                    handle.close();
                    list.fetch();
                }
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <StockOpnameDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    list.fetch();

    let page_ids = move || list.items.with(|items| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>());

    view! {
        <div class="page">
            <ListHeader
                title="Stock opname"
                on_new=Callback::new(move |_| open_details(None))
                on_refresh=Callback::new(move |_| list.fetch())
                on_delete=Callback::new(move |_| list.delete_selected())
                selected_count=Signal::derive(move || list.selected.with(|s| s.len()))
            />
            <div class="toolbar">
                <SearchBox
                    placeholder="Document no"
                    on_search=Callback::new(move |q| list.set_search(q))
                />
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
                            <th class="table__header-cell table__cell--checkbox">
                                <input
                                    type="checkbox"
                                    on:change=move |ev| list.set_all(page_ids(), event_target_checked(&ev))
                                />
                            </th>
                            <th class="table__header-cell">"Document no"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Lines"</th>
                            <th class="table__header-cell">"Total difference"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|doc| {
                                    let id = doc.id.clone();
                                    let id_check = id.clone();
                                    let id_toggle = id.clone();
                                    let id_selected = id.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=move || list.is_selected(&id_selected)
                                            on:click=move |_| open_details(Some(id.clone()))
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || list.is_selected(&id_check))
                                                on_change=Callback::new(move |checked| list.toggle(id_toggle.clone(), checked))
                                            />
                                            <td class="table__cell">{doc.code}</td>
                                            <td class="table__cell">{doc.document_date}</td>
                                            <td class="table__cell table__cell--number">{doc.line_count}</td>
                                            <td class="table__cell table__cell--number">{format_qty(doc.total_difference)}</td>
                                            <td class="table__cell"><PostedBadge posted=doc.is_posted /></td>
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
