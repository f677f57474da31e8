use super::view_model::DesignDetailsViewModel;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::refs::{load_design_types, RefSelect};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DesignDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DesignDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let design_types = load_design_types();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit design" } else { "New design" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="Code"
                    value=Signal::derive(move || form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                />
                <div class="form-group">
                    <label>"Design type"</label>
                    <RefSelect
                        refs=design_types
                        value=Signal::derive(move || form.with(|f| f.design_type_ref.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.design_type_ref = v))
                    />
                </div>
                <TextField
                    label="Description"
                    wide=true
                    value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = Some(v).filter(|s| !s.trim().is_empty())))
                    placeholder="Defaults to the code"
                />
                <TextAreaField
                    label="Comment"
                    value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.comment = Some(v).filter(|s| !s.is_empty())))
                />
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save_command(on_saved)>
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
