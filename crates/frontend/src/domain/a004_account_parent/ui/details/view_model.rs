use super::model;
use contracts::domain::a004_account_parent::AccountParentDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn validate_form(dto: &AccountParentDto) -> Result<(), String> {
    if dto.account_no <= 0 {
        return Err("Account number must be a positive number".into());
    }
    if dto.description.trim().is_empty() {
        return Err("Group name is required".into());
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct AccountParentDetailsViewModel {
    pub form: RwSignal<AccountParentDto>,
    pub error: RwSignal<Option<String>>,
}

impl AccountParentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AccountParentDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let vm = *self;
        spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(parent) => vm.form.set(AccountParentDto::from(&parent)),
                Err(e) => vm.error.set(Some(format!("Failed to load group: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(e) = validate_form(&dto) {
            self.error.set(Some(e));
            return;
        }
        let error = self.error;
        spawn_local(async move {
            match model::save(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_form() {
        let mut dto = AccountParentDto {
            account_no: 0,
            description: "Dyes".into(),
            ..Default::default()
        };
        assert!(validate_form(&dto).is_err());
        dto.account_no = 1100;
        assert!(validate_form(&dto).is_ok());
    }
}
