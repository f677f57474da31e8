use super::api;
use crate::shared::client_log::report_error;
use crate::shared::components::PaginationControls;
use crate::shared::excel::{read_workbook, selected_file};
use crate::shared::icons::icon;
use contracts::shared::list::PageMeta;
use contracts::usecases::common::{UseCaseMetadata, WorkbookUpload};
use contracts::usecases::u501_import_purchasing::{
    CommitResponse, ImportPurchasing, ImportTarget, PreviewSummary, StagedRowDto, StagedStatus,
    UploadResponse,
};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const STEPS: [&str; 3] = ["Upload", "Preview", "Commit"];

/// `KEY: value` pairs of a staged row's parsed data, nulls left out
pub fn describe_parsed(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => format!("{}: {}", k, s),
                other => format!("{}: {}", k, other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn target_label(target: ImportTarget) -> &'static str {
    match target {
        ImportTarget::Account => "Accounts",
        ImportTarget::Product => "Products",
        ImportTarget::Supplier => "Suppliers",
        ImportTarget::Purchasing => "Purchasing",
    }
}

#[component]
pub fn ImportPurchasingWizard() -> impl IntoView {
    let step = RwSignal::new(0usize);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let upload = RwSignal::new(None::<UploadResponse>);
    let summary = RwSignal::new(None::<PreviewSummary>);
    let target = RwSignal::new(ImportTarget::Account);
    let rows = RwSignal::new(Vec::<StagedRowDto>::new());
    let meta = RwSignal::new(PageMeta::default());
    let page = RwSignal::new(1u64);
    let per_page = RwSignal::new(50u64);
    let result = RwSignal::new(None::<CommitResponse>);

    let session_id = move || upload.with(|u| u.as_ref().map(|u| u.session_id.clone()));

    let load_page = move || {
        let Some(sid) = session_id() else { return };
        let (t, p, pp) = (target.get_untracked(), page.get_untracked(), per_page.get_untracked());
        spawn_local(async move {
            match api::preview_page(&sid, t, p, pp).await {
                Ok(data) => {
                    rows.set(data.items);
                    meta.set(data.meta);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let load_summary = move || {
        let Some(sid) = session_id() else { return };
        spawn_local(async move {
            match api::summary(&sid).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else { return };
        let file_name = file.name();
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let staged = async move {
                let sheets = read_workbook(file).await?;
                api::upload(&WorkbookUpload { file_name, sheets }).await
            }
            .await;
            match staged {
                Ok(resp) => {
                    log::info!("staged session {} from {}", resp.session_id, resp.file_name);
                    upload.set(Some(resp));
                    page.set(1);
                    target.set(ImportTarget::Account);
                    step.set(1);
                    load_summary();
                    load_page();
                }
                Err(e) => {
                    report_error(ImportPurchasing::usecase_index(), format!("upload failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let commit = move |_: leptos::ev::MouseEvent| {
        let Some(sid) = session_id() else { return };
        busy.set(true);
        spawn_local(async move {
            match api::commit(&sid).await {
                Ok(resp) => {
                    result.set(Some(resp));
                    step.set(2);
                }
                Err(e) => {
                    report_error(ImportPurchasing::usecase_index(), format!("commit failed: {}", e));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let reset = move || {
        upload.set(None);
        summary.set(None);
        rows.set(Vec::new());
        result.set(None);
        error.set(None);
        step.set(0);
    };

    let discard = move |_: leptos::ev::MouseEvent| {
        let Some(sid) = session_id() else { return };
        spawn_local(async move {
            match api::discard(&sid).await {
                Ok(()) => reset(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>{ImportPurchasing::display_name()}</h2>
            </div>
            <p class="muted">{ImportPurchasing::description()}</p>

            <div class="stepper">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! {
                            <span
                                class="stepper__step"
                                class:stepper__step--active={move || step.get() == i}
                                class:stepper__step--done={move || step.get() > i}
                            >
                                {format!("{}. {}", i + 1, name)}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || step.get() == 0>
                <div class="toolbar">
                    <input type="file" accept=".xlsx,.xls" on:change=on_file disabled=move || busy.get() />
                    {move || busy.get().then(|| view! { <span class="muted">"Reading workbook..."</span> })}
                </div>
            </Show>

            <Show when=move || step.get() == 1>
                <div class="table-container">
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th class="table__header-cell">"Sheet"</th>
                                <th class="table__header-cell">"Header row"</th>
                                <th class="table__header-cell">"Valid"</th>
                                <th class="table__header-cell">"Skipped"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                upload
                                    .get()
                                    .map(|u| u.sheets)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{s.sheet_name}</td>
                                                <td class="table__cell table__cell--number">{s.header_row + 1}</td>
                                                <td class="table__cell table__cell--number">{s.valid_rows}</td>
                                                <td class="table__cell table__cell--number">{s.skipped_rows}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="toolbar">
                    {ImportTarget::ALL
                        .into_iter()
                        .map(|t| {
                            let counts = move || {
                                summary.with(|s| {
                                    s.as_ref()
                                        .and_then(|s| s.targets.iter().find(|ts| ts.target == t))
                                        .map(|ts| format!(" ({} / {})", ts.valid, ts.skipped))
                                        .unwrap_or_default()
                                })
                            };
                            view! {
                                <Button
                                    appearance=move || {
                                        if target.get() == t {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    }
                                    on_click=move |_| {
                                        target.set(t);
                                        page.set(1);
                                        load_page();
                                    }
                                >
                                    {target_label(t)}
                                    {counts}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="muted">"Counts are valid / skipped rows."</p>

                <div class="table-container">
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th class="table__header-cell">"Row"</th>
                                <th class="table__header-cell">"Sheet"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Data"</th>
                                <th class="table__header-cell">"Reason"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|r| {
                                        let skipped = r.status == StagedStatus::Skipped;
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--number">{r.row_number}</td>
                                                <td class="table__cell">{r.sheet_name}</td>
                                                <td class="table__cell">
                                                    <span class="badge" class:badge--posted=!skipped>{r.status.as_str()}</span>
                                                </td>
                                                <td class="table__cell">{describe_parsed(&r.parsed_data)}</td>
                                                <td class="table__cell">{r.reason.unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <PaginationControls
                    current_page=Signal::derive(move || meta.with(|m| m.page.saturating_sub(1) as usize))
                    total_pages=Signal::derive(move || meta.with(|m| m.total_pages as usize))
                    total_count=Signal::derive(move || meta.with(|m| m.total as usize))
                    page_size=Signal::derive(move || per_page.get() as usize)
                    on_page_change=Callback::new(move |p: usize| {
                        page.set(p as u64 + 1);
                        load_page();
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        per_page.set(size as u64);
                        page.set(1);
                        load_page();
                    })
                />

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || busy.get())
                        on_click=commit
                    >
                        {icon("check")}
                        "Commit"
                    </Button>
                    <Button on_click=discard>
                        {icon("delete")}
                        "Discard"
                    </Button>
                </div>
            </Show>

            <Show when=move || step.get() == 2>
                {move || {
                    result
                        .get()
                        .map(|r| {
                            let c = r.inserted.clone();
                            view! {
                                <div class="notice">
                                    <h3>"Import committed"</h3>
                                    <ul>
                                        <li>{format!("Accounts: {}", c.accounts)}</li>
                                        <li>{format!("Suppliers: {}", c.suppliers)}</li>
                                        <li>{format!("Products: {}", c.products)}</li>
                                        <li>{format!("Purchasing documents: {}", c.purchasing_headers)}</li>
                                        <li>{format!("Purchasing lines: {}", c.purchasing_lines)}</li>
                                    </ul>
                                </div>
                                {(!r.warnings.is_empty())
                                    .then(|| {
                                        view! {
                                            <div class="error">
                                                <ul>
                                                    {r.warnings
                                                        .iter()
                                                        .map(|w| view! { <li>{w.clone()}</li> })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    })}
                            }
                        })
                }}
                <div class="details-actions">
                    <Button on_click=move |_| reset()>
                        {icon("upload")}
                        "Import another file"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_parsed_skips_nulls() {
        let v = json!({"code": "SP01", "name": "PT WARNA", "contact": null, "qty": 25.5});
        assert_eq!(describe_parsed(&v), "code: SP01, name: PT WARNA, qty: 25.5");
        assert_eq!(describe_parsed(&serde_json::Value::Null), "");
    }
}
