use crate::shared::icons::icon;
use crate::shared::list_utils::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// First / previous / next / last buttons plus a page size select.
///
/// Pages are 0-indexed here; the backend counts from 1.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button class="pagination-btn" title="First page" disabled=is_first
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button class="pagination-btn" title="Previous page" disabled=is_first
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button class="pagination-btn" title="Next page" disabled=is_last
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < total_pages.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button class="pagination-btn" title="Last page" disabled=is_last
                on:click=move |_| {
                    let total = total_pages.get_untracked();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[0]);
                    on_page_size_change.run(size);
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
