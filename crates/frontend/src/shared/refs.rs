//! Reference data for select boxes: products, suppliers, designs and so on.

use crate::shared::api_utils::get_json;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_account::Account;
use contracts::domain::a004_account_parent::AccountParent;
use contracts::domain::a005_design_type::DesignType;
use contracts::domain::a006_design::Design;
use contracts::domain::a009_color_kitchen_batch::ColorKitchenBatch;
use contracts::domain::common::AggregateId;
use contracts::shared::list::RefOption;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// Options loaded once per page
#[derive(Clone, Copy)]
pub struct RefOptions {
    pub options: RwSignal<Vec<RefOption>>,
    pub error: RwSignal<Option<String>>,
}

impl RefOptions {
    /// Display text of `id`, the id itself when unknown
    pub fn label_of(&self, id: &str) -> String {
        self.options.with(|opts| {
            opts.iter()
                .find(|o| o.id == id)
                .map(option_label)
                .unwrap_or_else(|| id.to_string())
        })
    }
}

pub fn option_label(option: &RefOption) -> String {
    if option.code.is_empty() || option.code == option.description {
        option.description.clone()
    } else {
        format!("{} - {}", option.code, option.description)
    }
}

fn load<T, F>(path: &'static str, map: F) -> RefOptions
where
    T: DeserializeOwned + 'static,
    F: Fn(&T) -> RefOption + 'static,
{
    let refs = RefOptions {
        options: RwSignal::new(Vec::new()),
        error: RwSignal::new(None),
    };
    spawn_local(async move {
        match get_json::<Vec<T>>(path).await {
            Ok(items) => {
                let mut options: Vec<RefOption> = items.iter().map(&map).collect();
                options.sort_by(|a, b| a.description.cmp(&b.description));
                refs.options.set(options);
            }
            Err(e) => {
                log::error!("failed to load {}: {}", path, e);
                refs.error.set(Some(e));
            }
        }
    });
    refs
}

pub fn load_products() -> RefOptions {
    load("/api/a002_product/all", |p: &Product| RefOption {
        id: p.base.id.as_string(),
        code: p.base.code.clone(),
        description: p.base.description.clone(),
    })
}

pub fn load_suppliers() -> RefOptions {
    load("/api/a001_supplier/all", |s: &Supplier| RefOption {
        id: s.base.id.as_string(),
        code: s.base.code.clone(),
        description: s.base.description.clone(),
    })
}

pub fn load_accounts() -> RefOptions {
    load("/api/a003_account/all", |a: &Account| RefOption {
        id: a.base.id.as_string(),
        code: a.base.code.clone(),
        description: a.base.description.clone(),
    })
}

pub fn load_account_parents() -> RefOptions {
    load("/api/a004_account_parent/all", |p: &AccountParent| RefOption {
        id: p.base.id.as_string(),
        code: p.base.code.clone(),
        description: p.base.description.clone(),
    })
}

pub fn load_design_types() -> RefOptions {
    load("/api/a005_design_type/all", |t: &DesignType| RefOption {
        id: t.base.id.as_string(),
        code: String::new(),
        description: t.base.description.clone(),
    })
}

pub fn load_designs() -> RefOptions {
    load("/api/a006_design/all", |d: &Design| RefOption {
        id: d.base.id.as_string(),
        code: d.base.code.clone(),
        description: d.base.description.clone(),
    })
}

pub fn load_batches() -> RefOptions {
    load("/api/a009_color_kitchen_batch/all", |b: &ColorKitchenBatch| RefOption {
        id: b.base.id.as_string(),
        code: b.base.code.clone(),
        description: b.document_date.clone(),
    })
}

/// Native select over reference options; the empty value means "none"
#[component]
pub fn RefSelect(
    refs: RefOptions,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "(none)".to_string());
    view! {
        <select
            class="ref-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                refs.options
                    .get()
                    .into_iter()
                    .map(|opt| {
                        let id = opt.id.clone();
                        let selected = move || value.get() == id;
                        view! {
                            <option value=opt.id.clone() selected=selected>
                                {option_label(&opt)}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_hides_duplicate_code() {
        let opt = RefOption {
            id: "1".into(),
            code: "SP01".into(),
            description: "PT WARNA".into(),
        };
        assert_eq!(option_label(&opt), "SP01 - PT WARNA");
        let opt = RefOption {
            id: "2".into(),
            code: String::new(),
            description: "REACTIVE BLUE".into(),
        };
        assert_eq!(option_label(&opt), "REACTIVE BLUE");
    }
}
