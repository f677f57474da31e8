use super::model::ENDPOINT;
use super::view_model::ColorKitchenBatchDetailsViewModel;
use crate::shared::components::{
    ConsumptionLinesTable, DateField, PostedBadge, PostingActions, TextAreaField, TextField,
};
use crate::shared::icons::icon;
use crate::shared::refs::load_products;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ColorKitchenBatchDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ColorKitchenBatchDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let products = load_products();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Batch" } else { "New batch" }}</h3>
                {move || vm.is_edit_mode().then(|| view! { <PostedBadge posted=vm.posted.get() /> })}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="Batch no"
                    value=Signal::derive(move || form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                />
                <DateField
                    label="Date"
                    value=Signal::derive(move || form.with(|f| f.document_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.document_date = v))
                />
            </div>

            <h4>"Dyes"</h4>
            <ConsumptionLinesTable lines=vm.dyes products=products product_label="Dye" />

            <div class="details-form">
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
                    "Save and post"
                </Button>
                <PostingActions
                    endpoint=ENDPOINT
                    id=Signal::derive(move || form.with(|f| f.id.clone()))
                    posted=vm.posted
                    error=vm.error
                    on_changed=on_saved
                />
                <Button on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
