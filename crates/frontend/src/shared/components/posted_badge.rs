use leptos::prelude::*;

#[component]
pub fn PostedBadge(posted: bool) -> impl IntoView {
    if posted {
        view! { <span class="badge badge--posted">"Posted"</span> }.into_any()
    } else {
        view! { <span class="badge">"Draft"</span> }.into_any()
    }
}
