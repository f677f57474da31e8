use super::model::ENDPOINT;
use super::view_model::ColorKitchenEntryDetailsViewModel;
use crate::shared::components::{
    ConsumptionLinesTable, DateField, NumberField, PostedBadge, PostingActions, TextAreaField,
    TextField,
};
use crate::shared::icons::icon;
use crate::shared::refs::{load_batches, load_designs, load_products, RefSelect};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ColorKitchenEntryDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ColorKitchenEntryDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let products = load_products();
    let designs = load_designs();
    let batches = load_batches();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Color kitchen entry" } else { "New color kitchen entry" }}</h3>
                {move || vm.is_edit_mode().then(|| view! { <PostedBadge posted=vm.posted.get() /> })}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="OPJ"
                    value=Signal::derive(move || form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                />
                <DateField
                    label="Date"
                    value=Signal::derive(move || form.with(|f| f.document_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.document_date = v))
                />
                <div class="form-group">
                    <label>"Design"</label>
                    <RefSelect
                        refs=designs
                        value=Signal::derive(move || form.with(|f| f.design_ref.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.design_ref = v))
                        placeholder="Select design"
                    />
                </div>
                <div class="form-group">
                    <label>"Batch"</label>
                    <RefSelect
                        refs=batches
                        value=Signal::derive(move || form.with(|f| f.batch_ref.clone().unwrap_or_default()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.batch_ref = Some(v).filter(|s| !s.is_empty())))
                        placeholder="No batch"
                    />
                </div>
                <NumberField
                    label="Rolls"
                    value=Signal::derive(move || form.with(|f| f.rolls))
                    on_input=Callback::new(move |v| form.update(|f| f.rolls = v))
                />
                <NumberField
                    label="Paste quantity"
                    value=Signal::derive(move || form.with(|f| f.paste_quantity))
                    on_input=Callback::new(move |v| form.update(|f| f.paste_quantity = v))
                />
            </div>

            <h4>"Auxiliaries"</h4>
            <ConsumptionLinesTable lines=vm.auxiliaries products=products product_label="Auxiliary" />

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
