//! Labelled inputs used by the details forms.

use crate::shared::format::parse_input_number;
use leptos::prelude::*;

fn group_class(wide: bool) -> &'static str {
    if wide {
        "form-group form-group--wide"
    } else {
        "form-group"
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    /// Spans both form columns
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    view! {
        <div class=group_class(wide)>
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group form-group--wide">
            <label>{label}</label>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="date"
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input committed on change so partial input like `1.` survives typing
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_input: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                step="any"
                prop:value=move || value.get().to_string()
                on:change=move |ev| on_input.run(parse_input_number(&event_target_value(&ev)))
            />
        </div>
    }
}

/// `<td>` with a numeric input for line tables
#[component]
pub fn NumberCell(#[prop(into)] value: Signal<f64>, on_change: Callback<f64>) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--number">
            <input
                type="number"
                step="any"
                prop:value=move || value.get().to_string()
                on:change=move |ev| on_change.run(parse_input_number(&event_target_value(&ev)))
            />
        </td>
    }
}
