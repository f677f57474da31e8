use super::model;
use chrono::Utc;
use contracts::domain::a007_purchasing::{PurchasingDto, PurchasingLine, PurchasingSummary};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn validate_form(dto: &PurchasingDto) -> Result<(), String> {
    if dto.code.trim().is_empty() {
        return Err("Document number is required".into());
    }
    if dto.document_date.is_empty() {
        return Err("Document date is required".into());
    }
    if dto.supplier_ref.is_empty() {
        return Err("Supplier is required".into());
    }
    if dto.lines.is_empty() {
        return Err("Add at least one line".into());
    }
    for (i, line) in dto.lines.iter().enumerate() {
        if line.product_ref.is_empty() {
            return Err(format!("Line {}: product is required", i + 1));
        }
        if line.quantity <= 0.0 {
            return Err(format!("Line {}: quantity must be positive", i + 1));
        }
    }
    Ok(())
}

fn empty_line() -> PurchasingLine {
    PurchasingLine {
        exchange_rate: 1.0,
        ..Default::default()
    }
}

#[derive(Clone, Copy)]
pub struct PurchasingDetailsViewModel {
    pub form: RwSignal<PurchasingDto>,
    pub posted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub line_count: Memo<usize>,
}

impl PurchasingDetailsViewModel {
    pub fn new() -> Self {
        let form = RwSignal::new(PurchasingDto {
            document_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            lines: vec![empty_line()],
            ..Default::default()
        });
        Self {
            form,
            posted: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            line_count: Memo::new(move |_| form.with(|f| f.lines.len())),
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
                Ok(doc) => {
                    vm.posted.set(doc.base.metadata.is_posted);
                    vm.form.set(PurchasingDto::from(&doc));
                }
                Err(e) => vm.error.set(Some(format!("Failed to load purchasing: {}", e))),
            }
        });
    }

    pub fn line(&self, idx: usize) -> PurchasingLine {
        self.form
            .with(|f| f.lines.get(idx).cloned())
            .unwrap_or_default()
    }

    /// Applies `edit` to one line and refreshes its DPP and subtotal
    pub fn update_line(&self, idx: usize, edit: impl FnOnce(&mut PurchasingLine)) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(idx) {
                edit(line);
                line.recalculate();
            }
        });
    }

    pub fn add_line(&self) {
        self.form.update(|f| f.lines.push(empty_line()));
    }

    pub fn remove_line(&self, idx: usize) {
        self.form.update(|f| {
            if idx < f.lines.len() {
                f.lines.remove(idx);
            }
        });
    }

    pub fn summary(&self) -> PurchasingSummary {
        self.form.with(|f| PurchasingSummary::from_lines(&f.lines))
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.lines.iter_mut().for_each(PurchasingLine::recalculate);
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

    fn valid_dto() -> PurchasingDto {
        PurchasingDto {
            code: "PB-001".into(),
            document_date: "2025-07-31".into(),
            supplier_ref: "s1".into(),
            lines: vec![PurchasingLine {
                product_ref: "p1".into(),
                quantity: 25.0,
                price: 46_375.0,
                ..empty_line()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_form_accepts_complete_document() {
        assert!(validate_form(&valid_dto()).is_ok());
    }

    #[test]
    fn test_validate_form_rejects_bad_lines() {
        let mut dto = valid_dto();
        dto.lines[0].quantity = 0.0;
        assert_eq!(
            validate_form(&dto).unwrap_err(),
            "Line 1: quantity must be positive"
        );

        let mut dto = valid_dto();
        dto.lines.clear();
        assert!(validate_form(&dto).is_err());

        let mut dto = valid_dto();
        dto.supplier_ref.clear();
        assert_eq!(validate_form(&dto).unwrap_err(), "Supplier is required");
    }
}
