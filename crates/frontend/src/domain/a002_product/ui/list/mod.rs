use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::components::{ListHeader, PaginationControls, SearchBox, TableCheckbox};
use crate::shared::format::format_amount;
use crate::shared::list_utils::PagedList;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_product::ProductListItem;
use leptos::prelude::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let list = PagedList::<ProductListItem>::new("/api/a002_product");
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |id: Option<String>| {
        modal_stack.push_with_frame(Some("width: min(720px, 95vw);".to_string()), move |handle| {
            let on_saved = Callback::new({
                let handle = handle.clone();
                move |_| {
                    handle.close();
                    list.fetch();
                }
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    list.fetch();

    view! {
        <div class="page">
            <ListHeader
                title="Products"
                on_new=Callback::new(move |_| open_details(None))
                on_refresh=Callback::new(move |_| list.fetch())
                on_delete=Callback::new(move |_| list.delete_selected())
                selected_count=Signal::derive(move || list.selected.with(|s| s.len()))
            />
            <div class="toolbar">
                <SearchBox
                    placeholder="Name or code"
                    on_search=Callback::new(move |q| list.set_search(q))
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
                                    on:change=move |ev| {
                                        let ids = list.items.with_untracked(|items| {
                                            items.iter().map(|p| p.id.clone()).collect()
                                        });
                                        list.set_all(ids, event_target_checked(&ev));
                                    }
                                />
                            </th>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Unit"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell table__cell--number">"Avg cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let id = product.id.clone();
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
                                            <td class="table__cell">{product.code}</td>
                                            <td class="table__cell">{product.name}</td>
                                            <td class="table__cell">{product.unit.unwrap_or_default()}</td>
                                            <td class="table__cell">{product.account_name.unwrap_or_default()}</td>
                                            <td class="table__cell table__cell--number">
                                                {product.avg_cost.map(format_amount).unwrap_or_default()}
                                            </td>
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
