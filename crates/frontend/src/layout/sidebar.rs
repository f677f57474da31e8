//! Collapsible navigation menu. Every item opens (or activates) a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                ("d400_overview", "activity"),
                ("d401_purchasing", "bar-chart"),
                ("d402_color_kitchen", "droplet"),
            ],
        },
        MenuGroup {
            id: "master_data",
            label: "Master data",
            icon: "database",
            items: vec![
                ("a001_supplier", "truck"),
                ("a002_product", "package"),
                ("a005_design_type", "layers"),
                ("a006_design", "image"),
            ],
        },
        MenuGroup {
            id: "accounts",
            label: "Accounts",
            icon: "book",
            items: vec![
                ("a003_account", "list"),
                ("a004_account_parent", "folder"),
                ("a004_account_board", "columns"),
            ],
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "file-text",
            items: vec![
                ("a007_purchasing", "shopping-cart"),
                ("a008_stock_movement", "repeat"),
                ("a009_color_kitchen_batch", "droplet"),
                ("a010_color_kitchen_entry", "clipboard"),
                ("a011_stock_opname", "check-square"),
            ],
        },
        MenuGroup {
            id: "import",
            label: "Import",
            icon: "upload",
            items: vec![
                ("u501_import_purchasing", "upload"),
                ("u502_import_stock_movement", "upload"),
                ("u503_import_stock_opname", "upload"),
                ("u504_import_opening_balance", "upload"),
                ("u505_import_color_kitchen", "upload"),
            ],
        },
        MenuGroup {
            id: "information",
            label: "Information",
            icon: "info",
            items: vec![
                ("p900_stock_ledger", "list"),
                ("p900_stock_balances", "layers"),
                ("p901_product_avg_cost", "dollar-sign"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "settings",
            items: vec![("sys_logs", "terminal"), ("sys_audit_log", "clock")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "documents".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = StoredValue::new(group.id.to_string());
                let items = StoredValue::new(group.items.clone());
                let is_expanded = move || expanded_groups.get().contains(&gid.get_value());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let id = gid.get_value();
                                expanded_groups.update(|open| {
                                    if let Some(pos) = open.iter().position(|x| *x == id) {
                                        open.remove(pos);
                                    } else {
                                        open.push(id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
