use super::view_model::SupplierDetailsViewModel;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SupplierDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit supplier" } else { "New supplier" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="Code"
                    value=Signal::derive(move || form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                    placeholder="e.g. SP001"
                />
                <TextField
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <TextField
                    label="Contact"
                    wide=true
                    value=Signal::derive(move || form.with(|f| f.contact_info.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.contact_info = Some(v).filter(|s| !s.is_empty())))
                />
                <TextAreaField
                    label="Comment"
                    value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.comment = Some(v).filter(|s| !s.is_empty())))
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
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
