use super::model;
use contracts::domain::a001_supplier::SupplierDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Checks done before the request; the backend repeats them
pub fn validate_form(dto: &SupplierDto) -> Result<(), String> {
    if dto.code.trim().is_empty() {
        return Err("Supplier code is required".into());
    }
    if dto.description.trim().is_empty() {
        return Err("Supplier name is required".into());
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SupplierDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SupplierDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
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
                Ok(supplier) => vm.form.set(SupplierDto::from(&supplier)),
                Err(e) => vm.error.set(Some(format!("Failed to load supplier: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(e) = validate_form(&dto) {
            self.error.set(Some(e));
            return;
        }
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match model::save(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
            vm.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_form_requires_code_and_name() {
        let mut dto = SupplierDto {
            code: " ".into(),
            description: "PT WARNA".into(),
            ..Default::default()
        };
        assert!(validate_form(&dto).is_err());
        dto.code = "SP01".into();
        assert!(validate_form(&dto).is_ok());
        dto.description.clear();
        assert!(validate_form(&dto).is_err());
    }
}
