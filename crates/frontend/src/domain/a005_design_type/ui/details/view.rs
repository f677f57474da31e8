use crate::shared::api_utils::{get_json, post_json};
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::icons::icon;
use contracts::domain::a005_design_type::{DesignType, DesignTypeDto};
use contracts::shared::list::SavedId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const ENDPOINT: &str = "/api/a005_design_type";

#[component]
pub fn DesignTypeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(DesignTypeDto::default());
    let error = RwSignal::new(None::<String>);

    if let Some(id) = id {
        spawn_local(async move {
            match get_json::<DesignType>(&format!("{}/{}", ENDPOINT, id)).await {
                Ok(t) => form.set(DesignTypeDto::from(&t)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = form.get_untracked();
        if dto.description.trim().is_empty() {
            error.set(Some("Design type name is required".into()));
            return;
        }
        spawn_local(async move {
            match post_json::<_, SavedId>(ENDPOINT, &dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"Design type"</h3>
            </div>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                <TextField
                    label="Name"
                    wide=true
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    placeholder="e.g. ROTARY"
                />
                <TextAreaField
                    label="Comment"
                    value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.comment = Some(v).filter(|s| !s.is_empty())))
                />
            </div>
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {icon("save")}
                    "Save"
                </Button>
                <Button on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
