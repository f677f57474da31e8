use super::model;
use chrono::Utc;
use contracts::domain::a011_stock_opname::{StockOpnameDto, StockOpnameLine};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn validate_form(dto: &StockOpnameDto) -> Result<(), String> {
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
        if line.physical_quantity < 0.0 {
            return Err(format!("Line {}: physical quantity must not be negative", i + 1));
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct StockOpnameDetailsViewModel {
    pub form: RwSignal<StockOpnameDto>,
    pub posted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StockOpnameDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StockOpnameDto {
                document_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
                lines: vec![StockOpnameLine::default()],
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
                    vm.form.set(StockOpnameDto::from(&doc));
                }
                Err(e) => vm.error.set(Some(format!("Failed to load stock opname: {}", e))),
            }
        });
    }

    pub fn line(&self, idx: usize) -> StockOpnameLine {
        self.form
            .with(|f| f.lines.get(idx).cloned())
            .unwrap_or_default()
    }

    pub fn update_line(&self, idx: usize, edit: impl FnOnce(&mut StockOpnameLine)) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(idx) {
                edit(line);
                line.recalculate();
            }
        });
    }

    /// Sets the product of a line and prefills its system quantity
    pub fn select_product(&self, idx: usize, product_ref: String) {
        self.update_line(idx, |l| l.product_ref = product_ref.clone());
        if product_ref.is_empty() {
            return;
        }
        let vm = *self;
        let date = self.form.with_untracked(|f| f.document_date.clone());
        spawn_local(async move {
            match model::fetch_system_quantity(&product_ref, &date).await {
                // the line may have been changed or removed meanwhile
                Ok(qty) => vm.update_line(idx, |l| {
                    if l.product_ref == product_ref {
                        l.system_quantity = qty;
                    }
                }),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }

    /// Reloads system quantities of every line, e.g. after the date changed
    pub fn refresh_system_quantities(&self) {
        let lines: Vec<(usize, String)> = self.form.with_untracked(|f| {
            f.lines
                .iter()
                .enumerate()
                .filter(|(_, l)| !l.product_ref.is_empty())
                .map(|(i, l)| (i, l.product_ref.clone()))
                .collect()
        });
        for (idx, product_ref) in lines {
            self.select_product(idx, product_ref);
        }
    }

    pub fn total_difference(&self) -> f64 {
        self.form
            .with(|f| f.lines.iter().map(StockOpnameLine::calc_difference).sum())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.lines.iter_mut().for_each(StockOpnameLine::recalculate);
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
    fn test_validate_form_allows_zero_count() {
        let dto = StockOpnameDto {
            code: "SO-20250731".into(),
            document_date: "2025-07-31".into(),
            lines: vec![StockOpnameLine {
                product_ref: "p1".into(),
                system_quantity: 4.0,
                physical_quantity: 0.0,
                difference: 4.0,
            }],
            ..Default::default()
        };
        assert!(validate_form(&dto).is_ok());
    }

    #[test]
    fn test_validate_form_rejects_negative_count() {
        let dto = StockOpnameDto {
            code: "SO-20250731".into(),
            document_date: "2025-07-31".into(),
            lines: vec![StockOpnameLine {
                product_ref: "p1".into(),
                physical_quantity: -2.0,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            validate_form(&dto).unwrap_err(),
            "Line 1: physical quantity must not be negative"
        );
    }
}
