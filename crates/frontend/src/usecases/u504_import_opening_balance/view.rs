use super::api;
use crate::shared::client_log::report_error;
use crate::shared::excel::{read_sheet_request, selected_file};
use crate::shared::format::format_amount;
use chrono::Utc;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_import_opening_balance::{
    ImportOpeningBalance, OpeningBalanceResponse,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Opening stock booked as a purchasing from the SYSTEM supplier
#[component]
pub fn ImportOpeningBalancePage() -> impl IntoView {
    let as_of_date = RwSignal::new(Utc::now().date_naive().format("%Y-%m-%d").to_string());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<OpeningBalanceResponse>);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else { return };
        busy.set(true);
        error.set(None);
        result.set(None);
        spawn_local(async move {
            let outcome = async move {
                let body = read_sheet_request(file, None, Some(as_of_date.get_untracked())).await?;
                api::import(&body).await
            }
            .await;
            match outcome {
                Ok(resp) => result.set(Some(resp)),
                Err(e) => {
                    report_error(ImportOpeningBalance::usecase_index(), format!("import failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>{ImportOpeningBalance::display_name()}</h2>
            </div>
            <p class="muted">
                "Expected columns: NO, NAMA BARANG, SALDO AWAL, JUMLAH SALDO AWAL + PPN, JUMLAH FISIK. "
                "Values including PPN are split as DPP = total / 1.11."
            </p>
            <div class="toolbar">
                <label>"Opening date "</label>
                <input
                    type="date"
                    prop:value=move || as_of_date.get()
                    on:change=move |ev| as_of_date.set(event_target_value(&ev))
                />
                <input type="file" accept=".xlsx,.xls" on:change=on_file disabled=move || busy.get() />
                {move || busy.get().then(|| view! { <span class="muted">"Importing..."</span> })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                result
                    .get()
                    .map(|r| {
                        let created = match r.document {
                            Some(doc) => format!(
                                "Created {} dated {} with {} line(s), total value {}.",
                                doc.code,
                                doc.document_date,
                                doc.lines,
                                format_amount(r.total_value),
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
                            {(!r.errors.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="table-container">
                                            <table class="table__data">
                                                <thead>
                                                    <tr>
                                                        <th class="table__header-cell">"Row"</th>
                                                        <th class="table__header-cell">"Not imported"</th>
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
