//! Editable table of consumed chemicals (batch dyes, entry auxiliaries).

use crate::shared::components::NumberCell;
use crate::shared::format::{format_amount, format_qty};
use crate::shared::icons::icon;
use crate::shared::refs::{RefOptions, RefSelect};
use contracts::domain::a009_color_kitchen_batch::ConsumptionLine;
use leptos::prelude::*;
use thaw::*;

fn line_at(lines: RwSignal<Vec<ConsumptionLine>>, idx: usize) -> ConsumptionLine {
    lines.with(|l| l.get(idx).cloned()).unwrap_or_default()
}

fn edit_line(lines: RwSignal<Vec<ConsumptionLine>>, idx: usize, edit: impl FnOnce(&mut ConsumptionLine)) {
    lines.update(|l| {
        if let Some(line) = l.get_mut(idx) {
            edit(line);
            line.recalculate();
        }
    });
}

/// Quantity and cost totals of the lines
pub fn consumption_totals(lines: &[ConsumptionLine]) -> (f64, f64) {
    lines
        .iter()
        .fold((0.0, 0.0), |(q, c), l| (q + l.quantity, c + l.quantity * l.unit_cost_used))
}

/// A unit cost of 0 is filled with the product's average cost on save.
#[component]
pub fn ConsumptionLinesTable(
    lines: RwSignal<Vec<ConsumptionLine>>,
    products: RefOptions,
    #[prop(into)] product_label: String,
) -> impl IntoView {
    let line_count = Memo::new(move |_| lines.with(|l| l.len()));

    let row = move |idx: usize| {
        view! {
            <tr class="table__row">
                <td class="table__cell">{idx + 1}</td>
                <td class="table__cell">
                    <RefSelect
                        refs=products
                        value=Signal::derive(move || line_at(lines, idx).product_ref)
                        on_change=Callback::new(move |v| edit_line(lines, idx, |l| l.product_ref = v))
                        placeholder="Select product"
                    />
                </td>
                <NumberCell
                    value=Signal::derive(move || line_at(lines, idx).quantity)
                    on_change=Callback::new(move |v| edit_line(lines, idx, |l| l.quantity = v))
                />
                <NumberCell
                    value=Signal::derive(move || line_at(lines, idx).unit_cost_used)
                    on_change=Callback::new(move |v| edit_line(lines, idx, |l| l.unit_cost_used = v))
                />
                <td class="table__cell table__cell--number">
                    {move || format_amount(line_at(lines, idx).total_cost)}
                </td>
                <td class="table__cell">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| lines.update(|l| {
                            if idx < l.len() {
                                l.remove(idx);
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
        <div class="table-container">
            <table class="table__data">
                <thead>
                    <tr>
                        <th class="table__header-cell">"#"</th>
                        <th class="table__header-cell">{product_label}</th>
                        <th class="table__header-cell">"Qty"</th>
                        <th class="table__header-cell">"Unit cost"</th>
                        <th class="table__header-cell">"Total"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..line_count.get()).map(row).collect_view()}
                </tbody>
                <tfoot>
                    {move || {
                        let (qty, cost) = lines.with(|l| consumption_totals(l));
                        view! {
                            <tr class="table__footer">
                                <td class="table__cell" colspan="2">"Total"</td>
                                <td class="table__cell table__cell--number">{format_qty(qty)}</td>
                                <td class="table__cell"></td>
                                <td class="table__cell table__cell--number">{format_amount(cost)}</td>
                                <td class="table__cell"></td>
                            </tr>
                        }
                    }}
                </tfoot>
            </table>
        </div>
        <div class="toolbar">
            <Button size=ButtonSize::Small on_click=move |_| lines.update(|l| l.push(ConsumptionLine::default()))>
                {icon("plus")}
                "Add line"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_totals() {
        let lines = vec![
            ConsumptionLine {
                product_ref: "a".into(),
                quantity: 2.0,
                unit_cost_used: 1500.0,
                total_cost: 0.0,
            },
            ConsumptionLine {
                product_ref: "b".into(),
                quantity: 0.5,
                unit_cost_used: 4000.0,
                total_cost: 0.0,
            },
        ];
        assert_eq!(consumption_totals(&lines), (2.5, 5000.0));
        assert_eq!(consumption_totals(&[]), (0.0, 0.0));
    }
}
