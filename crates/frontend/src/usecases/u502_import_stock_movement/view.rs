use super::api;
use crate::shared::client_log::report_error;
use crate::shared::excel::{read_sheet_request, selected_file};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_import_stock_movement::{
    ImportStockMovement, StockMovementImportResponse,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Lap chemical report: every row moves stock from Gudang to the kitchen
#[component]
pub fn ImportStockMovementPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<StockMovementImportResponse>);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else { return };
        busy.set(true);
        error.set(None);
        result.set(None);
        spawn_local(async move {
            let outcome = async move {
                let body = read_sheet_request(file, None, None).await?;
                api::import(&body).await
            }
            .await;
            match outcome {
                Ok(resp) => {
                    log::info!(
                        "{}: {} movements, {} lines",
                        ImportStockMovement::usecase_index(),
                        resp.movements,
                        resp.details
                    );
                    result.set(Some(resp));
                }
                Err(e) => {
                    report_error(ImportStockMovement::usecase_index(), format!("import failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>{ImportStockMovement::display_name()}</h2>
            </div>
            <p class="muted">
                "Expected columns: NOBUKTI, TANGGAL, QTY, NAMABRG. Movements are grouped by number and date and posted."
            </p>
            <div class="toolbar">
                <input type="file" accept=".xlsx,.xls" on:change=on_file disabled=move || busy.get() />
                {move || busy.get().then(|| view! { <span class="muted">"Importing..."</span> })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                result
                    .get()
                    .map(|r| {
                        view! {
                            <div class="notice">
                                {format!(
                                    "Created {} movement(s) with {} line(s); {} row(s) skipped.",
                                    r.movements,
                                    r.details,
                                    r.skipped,
                                )}
                            </div>
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
