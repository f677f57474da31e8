use super::api;
use crate::shared::client_log::report_error;
use crate::shared::excel::{read_sheet_request, selected_file};
use crate::shared::format::format_qty;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::usecases::common::{SheetRowsRequest, UseCaseMetadata};
use contracts::usecases::u503_import_stock_opname::{
    ImportStockOpname, OpnameImportResponse, OpnamePreviewResponse,
};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ImportStockOpnamePage() -> impl IntoView {
    let as_of_date = RwSignal::new(Utc::now().date_naive().format("%Y-%m-%d").to_string());
    let request = RwSignal::new(None::<SheetRowsRequest>);
    let preview = RwSignal::new(None::<OpnamePreviewResponse>);
    let result = RwSignal::new(None::<OpnameImportResponse>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else { return };
        busy.set(true);
        error.set(None);
        preview.set(None);
        result.set(None);
        spawn_local(async move {
            let outcome = async move {
                let body = read_sheet_request(file, None, Some(as_of_date.get_untracked())).await?;
                let resp = api::preview(&body).await?;
                Ok::<_, String>((body, resp))
            }
            .await;
            match outcome {
                Ok((body, resp)) => {
                    request.set(Some(body));
                    preview.set(Some(resp));
                }
                Err(e) => {
                    report_error(ImportStockOpname::usecase_index(), format!("preview failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let import = move |_: leptos::ev::MouseEvent| {
        let Some(mut body) = request.get_untracked() else { return };
        body.as_of_date = Some(as_of_date.get_untracked());
        busy.set(true);
        spawn_local(async move {
            match api::import(&body).await {
                Ok(resp) => {
                    request.set(None);
                    result.set(Some(resp));
                }
                Err(e) => {
                    report_error(ImportStockOpname::usecase_index(), format!("import failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>{ImportStockOpname::display_name()}</h2>
            </div>
            <p class="muted">
                "Expected columns: NO, NAMA BARANG, SALDO AWAL, MUTASI MASUK, MUTASI KELUAR, FISIK."
            </p>
            <div class="toolbar">
                <label>"Count date "</label>
                <input
                    type="date"
                    prop:value=move || as_of_date.get()
                    on:change=move |ev| as_of_date.set(event_target_value(&ev))
                />
                <input type="file" accept=".xlsx,.xls" on:change=on_file disabled=move || busy.get() />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                preview
                    .get()
                    .map(|p| {
                        let unknown = p.rows.iter().filter(|r| !r.product_exists).count();
                        view! {
                            <div class="notice">
                                {format!(
                                    "{} row(s) read, showing {}. {} product(s) not found will be skipped.",
                                    p.total_rows,
                                    p.rows.len(),
                                    unknown,
                                )}
                            </div>
                            <div class="table-container">
                                <table class="table__data">
                                    <thead>
                                        <tr>
                                            <th class="table__header-cell">"Row"</th>
                                            <th class="table__header-cell">"Product"</th>
                                            <th class="table__header-cell">"System"</th>
                                            <th class="table__header-cell">"Physical"</th>
                                            <th class="table__header-cell">"Difference"</th>
                                            <th class="table__header-cell">"Movement"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {p.rows
                                            .into_iter()
                                            .map(|r| {
                                                view! {
                                                    <tr class="table__row" class:muted=!r.product_exists>
                                                        <td class="table__cell table__cell--number">{r.row}</td>
                                                        <td class="table__cell">{r.product_name}</td>
                                                        <td class="table__cell table__cell--number">{format_qty(r.system_quantity)}</td>
                                                        <td class="table__cell table__cell--number">{format_qty(r.physical_quantity)}</td>
                                                        <td class="table__cell table__cell--number">{format_qty(r.difference)}</td>
                                                        <td class="table__cell">{r.movement}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}

            <Show when=move || request.with(|r| r.is_some())>
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || busy.get())
                        on_click=import
                    >
                        {icon("check")}
                        "Create opname document"
                    </Button>
                </div>
            </Show>

            {move || {
                result
                    .get()
                    .map(|r| {
                        let created = match r.document {
                            Some(doc) => format!(
                                "Created {} dated {} with {} line(s), posted.",
                                doc.code,
                                doc.document_date,
                                doc.lines,
                            ),
                            None => "No document created: no known products in the file.".to_string(),
                        };
                        view! {
                            <div class="notice">{created}</div>
                            {(!r.skipped.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="error">
                                            {format!("Skipped unknown products: {}", r.skipped.join(", "))}
                                        </div>
                                    }
                                })}
                        }
                    })
            }}
        </div>
    }
}
