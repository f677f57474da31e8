use super::view_model::AccountParentDetailsViewModel;
use crate::shared::components::{NumberField, TextAreaField, TextField};
use crate::shared::icons::icon;
use contracts::domain::a004_account_parent::AccountCategory;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccountParentDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AccountParentDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit account group" } else { "New account group" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <NumberField
                    label="Account no"
                    value=Signal::derive(move || form.with(|f| f.account_no as f64))
                    on_input=Callback::new(move |v: f64| form.update(|f| f.account_no = v.trunc() as i64))
                />
                <TextField
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <div class="form-group">
                    <label>"Category"</label>
                    <select
                        prop:value=move || form.with(|f| f.category.as_str().to_string())
                        on:change=move |ev| {
                            let category = AccountCategory::parse(&event_target_value(&ev));
                            form.update(|f| f.category = category);
                        }
                    >
                        <option value="chemical">"Chemical"</option>
                        <option value="sparepart">"Sparepart"</option>
                    </select>
                </div>
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
