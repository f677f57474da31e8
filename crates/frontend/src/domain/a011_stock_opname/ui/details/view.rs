use super::model::ENDPOINT;
use super::view_model::StockOpnameDetailsViewModel;
use crate::shared::components::{
    DateField, NumberCell, PostedBadge, PostingActions, TextAreaField, TextField,
};
use crate::shared::format::format_qty;
use crate::shared::icons::icon;
use crate::shared::refs::{load_products, RefSelect};
use contracts::domain::a011_stock_opname::{describe_difference, StockOpnameLine};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StockOpnameDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StockOpnameDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let products = load_products();
    let line_count = Memo::new(move |_| form.with(|f| f.lines.len()));

    let row = move |idx: usize| {
        view! {
            <tr class="table__row">
                <td class="table__cell">{idx + 1}</td>
                <td class="table__cell">
                    <RefSelect
                        refs=products
                        value=Signal::derive(move || vm.line(idx).product_ref)
                        on_change=Callback::new(move |v| vm.select_product(idx, v))
                        placeholder="Select product"
                    />
                </td>
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).system_quantity)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.system_quantity = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).physical_quantity)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.physical_quantity = v))
                />
                <td class="table__cell table__cell--number">
                    {move || format_qty(vm.line(idx).calc_difference())}
                </td>
                <td class="table__cell">{move || describe_difference(vm.line(idx).calc_difference())}</td>
                <td class="table__cell">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| form.update(|f| {
                            if idx < f.lines.len() {
                                f.lines.remove(idx);
                            }
                        })
                    >
                        {icon("x")}
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Stock opname" } else { "New stock opname" }}</h3>
                {move || vm.is_edit_mode().then(|| view! { <PostedBadge posted=vm.posted.get() /> })}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <TextField
                    label="Document no"
                    value=Signal::derive(move || form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                />
                <DateField
                    label="Count date"
                    value=Signal::derive(move || form.with(|f| f.document_date.clone()))
                    on_input=Callback::new(move |v| {
                        form.update(|f| f.document_date = v);
                        vm.refresh_system_quantities();
                    })
                />
            </div>

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"System"</th>
                            <th class="table__header-cell">"Physical"</th>
                            <th class="table__header-cell">"Difference"</th>
                            <th class="table__header-cell">"Movement"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || (0..line_count.get()).map(row).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr class="table__footer">
                            <td class="table__cell" colspan="4">"Total difference"</td>
                            <td class="table__cell table__cell--number">{move || format_qty(vm.total_difference())}</td>
                            <td class="table__cell" colspan="2"></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
            <div class="toolbar">
                <Button
                    size=ButtonSize::Small
                    on_click=move |_| form.update(|f| f.lines.push(StockOpnameLine::default()))
                >
                    {icon("plus")}
                    "Add line"
                </Button>
                <Button size=ButtonSize::Small on_click=move |_| vm.refresh_system_quantities()>
                    {icon("refresh")}
                    "Reload system quantities"
                </Button>
            </div>

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
