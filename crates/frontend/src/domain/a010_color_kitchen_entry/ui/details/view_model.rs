use super::model;
use chrono::Utc;
use contracts::domain::a009_color_kitchen_batch::ConsumptionLine;
use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntryDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn validate_form(dto: &ColorKitchenEntryDto) -> Result<(), String> {
    if dto.code.trim().is_empty() {
        return Err("OPJ number is required".into());
    }
    if dto.document_date.is_empty() {
        return Err("Document date is required".into());
    }
    if dto.design_ref.is_empty() {
        return Err("Design is required".into());
    }
    if dto.rolls < 0.0 || dto.paste_quantity < 0.0 {
        return Err("Rolls and paste quantity must not be negative".into());
    }
    for (i, line) in dto.auxiliaries.iter().enumerate() {
        if line.product_ref.is_empty() {
            return Err(format!("Auxiliary {}: product is required", i + 1));
        }
        if line.quantity <= 0.0 {
            return Err(format!("Auxiliary {}: quantity must be positive", i + 1));
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct ColorKitchenEntryDetailsViewModel {
    pub form: RwSignal<ColorKitchenEntryDto>,
    pub auxiliaries: RwSignal<Vec<ConsumptionLine>>,
    pub posted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ColorKitchenEntryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ColorKitchenEntryDto {
                document_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
                ..Default::default()
            }),
            auxiliaries: RwSignal::new(Vec::new()),
            posted: RwSignal::new(false),
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
                Ok(entry) => {
                    let dto = ColorKitchenEntryDto::from(&entry);
                    vm.posted.set(entry.base.metadata.is_posted);
                    vm.auxiliaries.set(dto.auxiliaries.clone());
                    vm.form.set(dto);
                }
                Err(e) => vm.error.set(Some(format!("Failed to load entry: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.auxiliaries = self.auxiliaries.get_untracked();
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
    fn test_validate_form_requires_design() {
        let mut dto = ColorKitchenEntryDto {
            code: "OPJ-118".into(),
            document_date: "2025-07-31".into(),
            rolls: 12.0,
            paste_quantity: 40.0,
            ..Default::default()
        };
        assert_eq!(validate_form(&dto).unwrap_err(), "Design is required");
        dto.design_ref = "d1".into();
        assert!(validate_form(&dto).is_ok());
        dto.rolls = -1.0;
        assert!(validate_form(&dto).is_err());
    }
}
