use super::view_model::PurchasingDetailsViewModel;
use crate::shared::components::NumberCell;
use crate::shared::format::{format_amount, format_qty};
use crate::shared::icons::icon;
use crate::shared::refs::{RefOptions, RefSelect};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchasingLinesTable(vm: PurchasingDetailsViewModel, products: RefOptions) -> impl IntoView {
    let row = move |idx: usize| {
        view! {
            <tr class="table__row">
                <td class="table__cell">{idx + 1}</td>
                <td class="table__cell">
                    <RefSelect
                        refs=products
                        value=Signal::derive(move || vm.line(idx).product_ref)
                        on_change=Callback::new(move |v| vm.update_line(idx, |l| l.product_ref = v))
                        placeholder="Select product"
                    />
                </td>
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).quantity)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.quantity = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).price)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.price = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).discount)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.discount = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).ppn)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.ppn = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).pph)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.pph = v))
                />
                <NumberCell
                    value=Signal::derive(move || vm.line(idx).exchange_rate)
                    on_change=Callback::new(move |v| vm.update_line(idx, |l| l.exchange_rate = v))
                />
                <td class="table__cell table__cell--number">{move || format_amount(vm.line(idx).dpp)}</td>
                <td class="table__cell table__cell--number">{move || format_amount(vm.line(idx).subtotal)}</td>
                <td class="table__cell">
                    <input
                        type="text"
                        prop:value=move || vm.line(idx).tax_no.unwrap_or_default()
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            vm.update_line(idx, |l| l.tax_no = Some(v).filter(|s| !s.trim().is_empty()));
                        }
                    />
                </td>
                <td class="table__cell">
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| vm.remove_line(idx)>
                        {icon("x")}
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="table-container">
            <table class="table__data">
                <thead>
                    <tr>
                        <th class="table__header-cell">"#"</th>
                        <th class="table__header-cell">"Product"</th>
                        <th class="table__header-cell">"Qty"</th>
                        <th class="table__header-cell">"Price"</th>
                        <th class="table__header-cell">"Discount"</th>
                        <th class="table__header-cell">"PPN"</th>
                        <th class="table__header-cell">"PPh"</th>
                        <th class="table__header-cell">"Rate"</th>
                        <th class="table__header-cell">"DPP"</th>
                        <th class="table__header-cell">"Subtotal"</th>
                        <th class="table__header-cell">"Tax no"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..vm.line_count.get()).map(row).collect_view()}
                </tbody>
                <tfoot>
                    {move || {
                        let s = vm.summary();
                        view! {
                            <tr class="table__footer">
                                <td class="table__cell" colspan="2">{format!("{} item(s)", s.total_items)}</td>
                                <td class="table__cell table__cell--number">
                                    {format_qty(vm.form.with(|f| f.lines.iter().map(|l| l.quantity).sum::<f64>()))}
                                </td>
                                <td class="table__cell" colspan="2"></td>
                                <td class="table__cell table__cell--number">{format_amount(s.total_ppn)}</td>
                                <td class="table__cell table__cell--number">{format_amount(s.total_pph)}</td>
                                <td class="table__cell"></td>
                                <td class="table__cell table__cell--number">{format_amount(s.total_dpp)}</td>
                                <td class="table__cell table__cell--number">
                                    <strong>{format_amount(s.grand_total)}</strong>
                                </td>
                                <td class="table__cell" colspan="2"></td>
                            </tr>
                        }
                    }}
                </tfoot>
            </table>
        </div>
        <div class="toolbar">
            <Button size=ButtonSize::Small on_click=move |_| vm.add_line()>
                {icon("plus")}
                "Add line"
            </Button>
        </div>
    }
}
