use crate::shared::format::format_timestamp;
use crate::shared::icons::icon;
use crate::system::logs::api;
use contracts::shared::logger::LogEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LIMITS: [u64; 4] = [100, 500, 1000, 5000];

/// Application log written by the server and by the browser
#[component]
pub fn LogViewer() -> impl IntoView {
    let entries = RwSignal::new(Vec::<LogEntry>::new());
    let category = RwSignal::new(String::new());
    let limit = RwSignal::new(500_u64);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let refresh = move || {
        let limit = limit.get_untracked();
        let category = category.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_logs(limit, &category).await {
                Ok(items) => {
                    entries.set(items);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load logs: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    let clear = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete every log entry?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::clear_logs().await {
                Ok(()) => entries.set(Vec::new()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    refresh();

    view! {
        <div class="page">
            <div class="header">
                <h2>"Logs"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| refresh() disabled=loading>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=clear>
                        {icon("delete")}
                        "Clear"
                    </Button>
                </div>
            </div>
            <div class="toolbar">
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        refresh();
                    }
                />
                <select
                    prop:value=move || limit.get().to_string()
                    on:change=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            limit.set(v);
                            refresh();
                        }
                    }
                >
                    {LIMITS
                        .iter()
                        .map(|l| view! { <option value=l.to_string()>{format!("Last {}", l)}</option> })
                        .collect_view()}
                </select>
                <span class="muted">{move || format!("{} entries", entries.with(Vec::len))}</span>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|e| {
                            let class = if e.source == "client" { "log-line log-line--client" } else { "log-line" };
                            view! {
                                <div class=class>
                                    {format!(
                                        "{} [{}] {}: {}",
                                        format_timestamp(&e.timestamp),
                                        e.source,
                                        e.category,
                                        e.message,
                                    )}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
