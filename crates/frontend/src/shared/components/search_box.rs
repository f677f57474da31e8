use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Text search applied on Enter or with the button
#[component]
pub fn SearchBox(
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());

    view! {
        <div
            class="search-box"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_search.run(text.get_untracked());
                }
            }
        >
            <Input value=text placeholder=placeholder />
            <Button size=ButtonSize::Small on_click=move |_| on_search.run(text.get_untracked())>
                {icon("search")}
            </Button>
        </div>
    }
}
