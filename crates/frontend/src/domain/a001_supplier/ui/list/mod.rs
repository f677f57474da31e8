use crate::domain::a001_supplier::ui::details::SupplierDetails;
use crate::shared::components::{ListHeader, PaginationControls, SearchBox, TableCheckbox};
use crate::shared::list_utils::PagedList;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    let list = PagedList::<Supplier>::new("/api/a001_supplier");
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
            view! { <SupplierDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    list.fetch();

    view! {
        <div class="page">
            <ListHeader
                title="Suppliers"
                on_new=Callback::new(move |_| open_details(None))
                on_refresh=Callback::new(move |_| list.fetch())
                on_delete=Callback::new(move |_| list.delete_selected())
                selected_count=Signal::derive(move || list.selected.with(|s| s.len()))
            />
            <div class="toolbar">
                <SearchBox
                    placeholder="Code or name"
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
                                            items.iter().map(|s| s.base.id.as_string()).collect()
                                        });
                                        list.set_all(ids, event_target_checked(&ev));
                                    }
                                />
                            </th>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Contact"</th>
                            <th class="table__header-cell">"Comment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.items
                                .get()
                                .into_iter()
                                .map(|supplier| {
                                    let id = supplier.base.id.as_string();
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
                                            <td class="table__cell">{supplier.base.code}</td>
                                            <td class="table__cell">{supplier.base.description}</td>
                                            <td class="table__cell">{supplier.contact_info.unwrap_or_default()}</td>
                                            <td class="table__cell">{supplier.base.comment.unwrap_or_default()}</td>
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
