use super::model;
use contracts::domain::a002_product::ProductDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
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
                Ok(product) => vm.form.set(ProductDto::from(&product)),
                Err(e) => vm.error.set(Some(format!("Failed to load product: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if dto.description.trim().is_empty() {
            self.error.set(Some("Product name is required".into()));
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
