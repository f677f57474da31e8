use super::view_model::ProductDetailsViewModel;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::refs::{load_accounts, RefSelect};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let accounts = load_accounts();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit product" } else { "New product" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="Name"
                    wide=true
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    placeholder="Stored uppercase with single spaces"
                />
                <TextField
                    label="Code"
                    value=Signal::derive(move || form.with(|f| f.code.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.code = Some(v).filter(|s| !s.trim().is_empty())))
                    placeholder="Optional"
                />
                <TextField
                    label="Unit"
                    value=Signal::derive(move || form.with(|f| f.unit.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit = Some(v).filter(|s| !s.trim().is_empty())))
                    placeholder="KG, LTR, PCS"
                />
                <div class="form-group form-group--wide">
                    <label>"Account"</label>
                    <RefSelect
                        refs=accounts
                        value=Signal::derive(move || form.with(|f| f.account_ref.clone().unwrap_or_default()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.account_ref = Some(v).filter(|s| !s.is_empty())))
                    />
                </div>
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
