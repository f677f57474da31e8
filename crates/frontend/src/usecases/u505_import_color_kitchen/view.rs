use super::api;
use crate::shared::client_log::report_error;
use crate::shared::excel::{read_sheet_request, selected_file};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u505_import_color_kitchen::{
    ColorKitchenImportRequest, ColorKitchenImportResponse, ImportColorKitchen, SHEET_NAME,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Lap CK report: CK batches with their print orders, posted on import
#[component]
pub fn ImportColorKitchenPage() -> impl IntoView {
    let create_missing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<ColorKitchenImportResponse>);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else { return };
        busy.set(true);
        error.set(None);
        result.set(None);
        spawn_local(async move {
            let outcome = async move {
                let sheet = read_sheet_request(file, Some(SHEET_NAME), None).await?;
                api::import(&ColorKitchenImportRequest {
                    sheet,
                    create_missing: create_missing.get_untracked(),
                })
                .await
            }
            .await;
            match outcome {
                Ok(resp) => {
                    log::info!(
                        "{}: {} batches, {} entries",
                        ImportColorKitchen::usecase_index(),
                        resp.batches,
                        resp.entries
                    );
                    result.set(Some(resp));
                }
                Err(e) => {
                    report_error(ImportColorKitchen::usecase_index(), format!("import failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>{ImportColorKitchen::display_name()}</h2>
            </div>
            <p class="muted">
                "Reads the TEMPLATE QTY sheet: OPJ, DESIGN, JENIS KAIN, ROLL, TGL, then dyestuff and AUXILIARIES columns. "
                "A blank row closes a batch."
            </p>
            <div class="toolbar">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || create_missing.get()
                        on:change=move |ev| create_missing.set(event_target_checked(&ev))
                    />
                    " Create missing products and designs"
                </label>
                <input type="file" accept=".xlsx,.xls" on:change=on_file disabled=move || busy.get() />
                {move || busy.get().then(|| view! { <span class="muted">"Importing..."</span> })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                result
                    .get()
                    .map(|r| {
                        let mut created = Vec::new();
                        if !r.created_products.is_empty() {
                            created.push(format!("New products: {}", r.created_products.join(", ")));
                        }
                        if !r.created_designs.is_empty() {
                            created.push(format!("New designs: {}", r.created_designs.join(", ")));
                        }
                        view! {
                            <div class="notice">
                                {format!(
                                    "Created {} batch(es) with {} entry(ies); {} separator row(s) skipped.",
                                    r.batches,
                                    r.entries,
                                    r.skipped,
                                )}
                            </div>
                            {(!created.is_empty())
                                .then(|| view! { <div class="muted">{created.join(". ")}</div> })}
                            {(!r.errors.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="table-container">
                                            <table class="table__data">
                                                <thead>
                                                    <tr>
                                                        <th class="table__header-cell">"Row"</th>
                                                        <th class="table__header-cell">"Problem"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {r.errors
                                                        .into_iter()
                                                        .map(|e| {
                                                            view! {
                                                                <tr class="table__row">
                                                                    <td class="table__cell table__cell--number">{e.row}</td>
                                                                    <td class="table__cell">{e.reason}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tbody>
                                            </table>
                                        </div>
                                    }
                                })}
                        }
                    })
            }}
        </div>
    }
}
