use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Title plus the New / Refresh / Delete buttons of a list page
#[component]
pub fn ListHeader(
    #[prop(into)] title: String,
    on_new: Callback<()>,
    on_refresh: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] selected_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="header">
            <h2>{title}</h2>
            <div class="header__actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_new.run(())>
                    {icon("plus")}
                    "New"
                </Button>
                <Button on_click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button
                    disabled=Signal::derive(move || selected_count.get() == 0)
                    on_click=move |_| on_delete.run(())
                >
                    {icon("delete")}
                    {move || format!("Delete ({})", selected_count.get())}
                </Button>
            </div>
        </div>
    }
}
