use super::model;
use contracts::domain::a006_design::DesignDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct DesignDetailsViewModel {
    pub form: RwSignal<DesignDto>,
    pub error: RwSignal<Option<String>>,
}

impl DesignDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(DesignDto::default()),
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
                Ok(design) => vm.form.set(DesignDto::from(&design)),
                Err(e) => vm.error.set(Some(format!("Failed to load design: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if dto.code.trim().is_empty() || dto.design_type_ref.is_empty() {
            self.error.set(Some("Design code and type are required".into()));
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
