use super::model;
use chrono::Utc;
use contracts::domain::a008_stock_movement::{StockMovementDto, StockMovementLine};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn validate_form(dto: &StockMovementDto) -> Result<(), String> {
    if dto.code.trim().is_empty() {
        return Err("Document number is required".into());
    }
    if dto.document_date.is_empty() {
        return Err("Document date is required".into());
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

#[derive(Clone, Copy)]
pub struct StockMovementDetailsViewModel {
    pub form: RwSignal<StockMovementDto>,
    pub posted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StockMovementDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StockMovementDto {
                document_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
                lines: vec![StockMovementLine::default()],
                ..Default::default()
            }),
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
                Ok(doc) => {
                    vm.posted.set(doc.base.metadata.is_posted);
                    vm.form.set(StockMovementDto::from(&doc));
                }
                Err(e) => vm.error.set(Some(format!("Failed to load stock movement: {}", e))),
            }
        });
    }

    pub fn line(&self, idx: usize) -> StockMovementLine {
        self.form
            .with(|f| f.lines.get(idx).cloned())
            .unwrap_or_default()
    }

    pub fn update_line(&self, idx: usize, edit: impl FnOnce(&mut StockMovementLine)) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(idx) {
                edit(line);
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
    fn test_validate_form_checks_lines() {
        let mut dto = StockMovementDto {
            code: "SM-0731".into(),
            document_date: "2025-07-31".into(),
            lines: vec![StockMovementLine {
                product_ref: "p1".into(),
                quantity: 3.0,
                unit_cost_used: 0.0,
            }],
            ..Default::default()
        };
        assert!(validate_form(&dto).is_ok());

        dto.lines[0].product_ref.clear();
        assert_eq!(validate_form(&dto).unwrap_err(), "Line 1: product is required");

        dto.code = "  ".into();
        assert_eq!(validate_form(&dto).unwrap_err(), "Document number is required");
    }
}
