use crate::shared::api_utils::post_empty;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Post / Unpost buttons of a saved document.
///
/// `posted` is flipped after the backend accepted the command; nothing is
/// rendered while the document has no id yet.
#[component]
pub fn PostingActions(
    endpoint: &'static str,
    #[prop(into)] id: Signal<Option<String>>,
    posted: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let run = move |action: &'static str| {
        let Some(id) = id.get_untracked() else { return };
        busy.set(true);
        spawn_local(async move {
            match post_empty(&format!("{}/{}/{}", endpoint, id, action)).await {
                Ok(()) => {
                    posted.set(action == "post");
                    error.set(None);
                    on_changed.run(());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || id.with(|id| id.is_some())>
            <Show
                when=move || posted.get()
                fallback=move || view! {
                    <Button disabled=Signal::derive(move || busy.get()) on_click=move |_| run("post")>
                        {icon("check")}
                        "Post"
                    </Button>
                }
            >
                <Button disabled=Signal::derive(move || busy.get()) on_click=move |_| run("unpost")>
                    {icon("undo")}
                    "Unpost"
                </Button>
            </Show>
        </Show>
    }
}
