use crate::shared::components::PaginationControls;
use crate::shared::format::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::PagedList;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_account::Account;
use contracts::domain::a004_account_parent::AccountParent;
use contracts::domain::a005_design_type::DesignType;
use contracts::domain::a006_design::Design;
use contracts::domain::a007_purchasing::Purchasing;
use contracts::domain::a008_stock_movement::StockMovement;
use contracts::domain::a009_color_kitchen_batch::ColorKitchenBatch;
use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntry;
use contracts::domain::a011_stock_opname::StockOpname;
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditEntry;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn audited_tables() -> Vec<(String, &'static str)> {
    fn entry<A: AggregateRoot>() -> (String, &'static str) {
        (A::full_name(), A::list_name())
    }
    vec![
        entry::<Supplier>(),
        entry::<Product>(),
        entry::<Account>(),
        entry::<AccountParent>(),
        entry::<DesignType>(),
        entry::<Design>(),
        entry::<Purchasing>(),
        entry::<StockMovement>(),
        entry::<ColorKitchenBatch>(),
        entry::<ColorKitchenEntry>(),
        entry::<StockOpname>(),
    ]
}

/// Top level keys whose values differ between the two snapshots
pub fn changed_fields(old: Option<&Value>, new: Option<&Value>) -> Vec<String> {
    let empty = serde_json::Map::new();
    let old = old.and_then(Value::as_object).unwrap_or(&empty);
    let new = new.and_then(Value::as_object).unwrap_or(&empty);
    let mut keys: Vec<String> = old
        .keys()
        .chain(new.keys())
        .filter(|k| old.get(*k) != new.get(*k))
        .cloned()
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

fn pretty(value: &Option<Value>) -> String {
    value
        .as_ref()
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_default()
}

/// Before/after snapshots of edited and deleted records
#[component]
pub fn AuditLogList() -> impl IntoView {
    let list = PagedList::<AuditEntry>::new("/api/audit_log");
    let expanded = RwSignal::new(None::<String>);
    let table_filter = move || {
        list.filters.with(|f| {
            f.iter()
                .find(|(k, _)| *k == "table_name")
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        })
    };

    list.fetch();

    let row = move |entry: AuditEntry| {
        let id = entry.id.clone();
        let toggle_id = id.clone();
        let is_open = move || expanded.get().as_deref() == Some(id.as_str());
        let changed = changed_fields(entry.old_data.as_ref(), entry.new_data.as_ref()).join(", ");
        let old_text = pretty(&entry.old_data);
        let new_text = pretty(&entry.new_data);
        view! {
            <tr
                class="table__row"
                on:click=move |_| {
                    expanded.update(|e| {
                        *e = if e.as_deref() == Some(toggle_id.as_str()) {
                            None
                        } else {
                            Some(toggle_id.clone())
                        };
                    })
                }
            >
                <td class="table__cell">{format_timestamp(&entry.changed_at)}</td>
                <td class="table__cell">{entry.table_name}</td>
                <td class="table__cell">{entry.record_id}</td>
                <td class="table__cell">{entry.action}</td>
                <td class="table__cell">{entry.changed_by}</td>
                <td class="table__cell">{changed}</td>
            </tr>
            <Show when=is_open>
                <tr>
                    <td class="table__cell" colspan="3">
                        <pre class="log-line">{old_text.clone()}</pre>
                    </td>
                    <td class="table__cell" colspan="3">
                        <pre class="log-line">{new_text.clone()}</pre>
                    </td>
                </tr>
            </Show>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <h2>"Audit log"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| list.fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>
            <div class="toolbar">
                <select
                    prop:value=table_filter
                    on:change=move |ev| list.set_filter("table_name", Some(event_target_value(&ev)))
                >
                    <option value="">"All records"</option>
                    {audited_tables()
                        .into_iter()
                        .map(|(name, label)| view! { <option value=name>{label}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || list.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"When"</th>
                            <th class="table__header-cell">"Table"</th>
                            <th class="table__header-cell">"Record"</th>
                            <th class="table__header-cell">"Action"</th>
                            <th class="table__header-cell">"By"</th>
                            <th class="table__header-cell">"Changed fields"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.items.get().into_iter().map(row).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                page_size=Signal::derive(move || list.page_size())
                on_page_change=Callback::new(move |page| list.set_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_compares_snapshots() {
        let old = json!({ "code": "S1", "description": "PT A", "comment": null });
        let new = json!({ "code": "S1", "description": "PT B", "unit": "KG" });
        assert_eq!(changed_fields(Some(&old), Some(&new)), vec!["comment", "description", "unit"]);
    }

    #[test]
    fn test_changed_fields_on_delete_lists_every_key() {
        let old = json!({ "b": 1, "a": 2 });
        assert_eq!(changed_fields(Some(&old), None), vec!["a", "b"]);
    }

    #[test]
    fn test_audited_tables_use_aggregate_names() {
        let tables = audited_tables();
        assert_eq!(tables.len(), 11);
        assert_eq!(tables[0].0, "a001_supplier");
    }
}
