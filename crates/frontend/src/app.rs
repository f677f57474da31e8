use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use crate::layout::{Shell, Sidebar, TabStrip};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <MainLayout />
        <ModalHost />
    }
}

/// Sidebar + tab strip + the content of every opened tab.
///
/// Tabs stay mounted while open; inactive ones are hidden so their state survives.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabStrip />
                    <div class="tabs__content">
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        />
                    </div>
                }
                .into_any()
            }
        />
    }
}
