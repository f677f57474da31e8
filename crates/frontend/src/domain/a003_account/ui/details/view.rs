use crate::shared::api_utils::{get_json, post_json};
use crate::shared::components::{NumberField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::refs::{load_account_parents, RefSelect};
use contracts::domain::a003_account::{Account, AccountDto, AccountType};
use contracts::shared::list::SavedId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const ENDPOINT: &str = "/api/a003_account";

#[component]
pub fn AccountDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(AccountDto::default());
    let error = RwSignal::new(None::<String>);
    let parents = load_account_parents();

    if let Some(id) = id {
        spawn_local(async move {
            match get_json::<Account>(&format!("{}/{}", ENDPOINT, id)).await {
                Ok(account) => form.set(AccountDto::from(&account)),
                Err(e) => error.set(Some(format!("Failed to load account: {}", e))),
            }
        });
    }

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = form.get_untracked();
        if dto.account_no <= 0 || dto.description.trim().is_empty() {
            error.set(Some("Account number and name are required".into()));
            return;
        }
        spawn_local(async move {
            match post_json::<_, SavedId>(ENDPOINT, &dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if form.with(|f| f.id.is_some()) { "Edit account" } else { "New account" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <NumberField
                    label="Account no"
                    value=Signal::derive(move || form.with(|f| f.account_no as f64))
                    on_input=Callback::new(move |v: f64| form.update(|f| f.account_no = v.trunc() as i64))
                />
                <TextField
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <div class="form-group">
                    <label>"Type"</label>
                    <select
                        prop:value=move || form.with(|f| f.account_type.as_str().to_string())
                        on:change=move |ev| {
                            let kind = AccountType::parse(&event_target_value(&ev));
                            form.update(|f| f.account_type = kind);
                        }
                    >
                        <option value="Goods">"Goods"</option>
                        <option value="Service">"Service"</option>
                    </select>
                </div>
                <TextField
                    label="Alias"
                    value=Signal::derive(move || form.with(|f| f.alias.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.alias = Some(v).filter(|s| !s.trim().is_empty())))
                />
                <div class="form-group form-group--wide">
                    <label>"Group"</label>
                    <RefSelect
                        refs=parents
                        value=Signal::derive(move || form.with(|f| f.parent_ref.clone().unwrap_or_default()))
                        placeholder="Unassigned"
                        on_change=Callback::new(move |v: String| form.update(|f| f.parent_ref = Some(v).filter(|s| !s.is_empty())))
                    />
                </div>
                <TextAreaField
                    label="Comment"
                    value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.comment = Some(v).filter(|s| !s.is_empty())))
                />
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {icon("save")}
                    "Save"
                </Button>
                <Button on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
