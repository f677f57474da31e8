pub mod global_context;
pub mod sidebar;
pub mod tab_strip;
pub mod tabs;
pub mod top_header;

pub use sidebar::Sidebar;
pub use tab_strip::TabStrip;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +-----------------------------+
/// |          TopHeader          |
/// +-----------------------------+
/// |  Sidebar  |     Center      |
/// +-----------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    {left()}
                </div>
                <div class="app-main">{center()}</div>
            </div>
        </div>
    }
}
