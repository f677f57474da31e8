use super::parser::{parse_report, BatchGroup};
use crate::domain::{
    a002_product, a005_design_type, a006_design, a009_color_kitchen_batch,
    a010_color_kitchen_entry,
};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use crate::usecases::resolve_as_of_date;
use contracts::domain::a009_color_kitchen_batch::{ColorKitchenBatchDto, ConsumptionLine};
use contracts::domain::a010_color_kitchen_entry::ColorKitchenEntryDto;
use contracts::shared::normalize::normalize_code;
use contracts::usecases::common::RowError;
use contracts::usecases::u505_import_color_kitchen::{
    ColorKitchenImportRequest, ColorKitchenImportResponse,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn consumption_lines(lines: &[(String, f64)], products: &HashMap<String, String>) -> Vec<ConsumptionLine> {
    lines
        .iter()
        .filter_map(|(name, quantity)| {
            Some(ConsumptionLine {
                product_ref: products.get(name)?.clone(),
                quantity: *quantity,
                ..Default::default()
            })
        })
        .collect()
}

/// Products and designs the report names that are not in the database.
/// Designs map to the JENIS KAIN of their first row.
fn find_missing(
    batches: &[BatchGroup],
    products: &HashMap<String, String>,
    designs: &HashMap<String, String>,
) -> (BTreeSet<String>, BTreeMap<String, String>) {
    let mut missing_products = BTreeSet::new();
    let mut missing_designs: BTreeMap<String, String> = BTreeMap::new();
    for batch in batches {
        let entry_lines = batch.entries.iter().flat_map(|e| e.auxiliaries.iter());
        for (name, _) in batch.dyes.iter().chain(entry_lines) {
            if !products.contains_key(name) {
                missing_products.insert(name.clone());
            }
        }
        for entry in &batch.entries {
            if !entry.design.is_empty() && !designs.contains_key(&entry.design) {
                let fabric = missing_designs.entry(entry.design.clone()).or_default();
                if fabric.is_empty() {
                    *fabric = entry.fabric.clone();
                }
            }
        }
    }
    (missing_products, missing_designs)
}

fn missing_message(products: &BTreeSet<String>, designs: &BTreeMap<String, String>) -> String {
    let mut parts = Vec::new();
    if !products.is_empty() {
        let names: Vec<&str> = products.iter().map(String::as_str).collect();
        parts.push(format!("Missing products: {}", names.join(", ")));
    }
    if !designs.is_empty() {
        let codes: Vec<&str> = designs.keys().map(String::as_str).collect();
        parts.push(format!("Missing designs: {}", codes.join(", ")));
    }
    parts.join(" | ")
}

/// Creates and posts one CK batch per group of orders, with a CK entry per order.
/// Unknown products or designs reject the whole file unless `create_missing` is set.
pub async fn import(request: ColorKitchenImportRequest) -> ServiceResult<ColorKitchenImportResponse> {
    let report = parse_report(&request.sheet.rows).map_err(ServiceError::Validation)?;
    let fallback_date = resolve_as_of_date(request.sheet.as_of_date.as_deref())?
        .format("%Y-%m-%d")
        .to_string();

    let mut products = a002_product::repository::id_by_name().await?;
    let mut designs: HashMap<String, String> = a006_design::repository::list_all()
        .await?
        .into_iter()
        .map(|d| (normalize_code(&d.base.code), d.to_string_id()))
        .collect();

    let (missing_products, missing_designs) = find_missing(&report.batches, &products, &designs);
    let mut response = ColorKitchenImportResponse {
        skipped: report.skipped,
        ..Default::default()
    };

    if !missing_products.is_empty() || !missing_designs.is_empty() {
        if !request.create_missing {
            return Err(ServiceError::Validation(missing_message(
                &missing_products,
                &missing_designs,
            )));
        }
        for name in missing_products {
            let (id, _) = a002_product::service::get_or_create(&name, None, None).await?;
            products.insert(name.clone(), id.to_string());
            response.created_products.push(name);
        }
        for (code, fabric) in missing_designs {
            if fabric.trim().is_empty() {
                continue;
            }
            let (type_id, _) = a005_design_type::service::get_or_create(&fabric).await?;
            let (id, _) = a006_design::service::get_or_create(&code, &type_id.to_string()).await?;
            designs.insert(code.clone(), id.to_string());
            response.created_designs.push(code);
        }
    }

    let mut errors = Vec::new();
    for batch in &report.batches {
        let code = batch.code(&fallback_date);
        if a009_color_kitchen_batch::repository::find_by_code(&normalize_code(&code))
            .await?
            .is_some()
        {
            errors.push(RowError::new(batch.first_row, format!("batch {} already exists", code)));
            continue;
        }

        let batch_date = batch.date.clone().unwrap_or_else(|| fallback_date.clone());
        let created = a009_color_kitchen_batch::service::create(ColorKitchenBatchDto {
            code: code.clone(),
            document_date: batch_date.clone(),
            dyes: consumption_lines(&batch.dyes, &products),
            ..Default::default()
        })
        .await;
        let batch_id = match created {
            Ok(id) => id,
            Err(ServiceError::Validation(e)) => {
                errors.push(RowError::new(batch.first_row, format!("batch {}: {}", code, e)));
                continue;
            }
            Err(e) => return Err(e),
        };
        response.batches += 1;

        for entry in &batch.entries {
            if entry.code.is_empty() {
                errors.push(RowError::new(entry.row, "OPJ is empty"));
                continue;
            }
            let Some(design_ref) = designs.get(&entry.design) else {
                errors.push(RowError::new(
                    entry.row,
                    format!("design not found: {}", entry.design),
                ));
                continue;
            };
            let created = a010_color_kitchen_entry::service::create(ColorKitchenEntryDto {
                code: entry.code.clone(),
                document_date: entry.date.clone().unwrap_or_else(|| batch_date.clone()),
                rolls: entry.rolls,
                paste_quantity: entry.paste_quantity,
                design_ref: design_ref.clone(),
                batch_ref: Some(batch_id.to_string()),
                auxiliaries: consumption_lines(&entry.auxiliaries, &products),
                ..Default::default()
            })
            .await;
            match created {
                Ok(_) => response.entries += 1,
                Err(ServiceError::Validation(e)) => {
                    errors.push(RowError::new(entry.row, format!("OPJ {}: {}", entry.code, e)))
                }
                Err(e) => return Err(e),
            }
        }
    }
    response.errors = errors;

    let message = format!(
        "u505 {}: {} batches, {} entries, {} new products, {} new designs, {} errors",
        request.sheet.file_name,
        response.batches,
        response.entries,
        response.created_products.len(),
        response.created_designs.len(),
        response.errors.len()
    );
    tracing::info!("{}", message);
    logger::log("import", &message);

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_stock_ledger;
    use crate::shared::data::db::test_database;
    use contracts::usecases::common::SheetRowsRequest;
    use uuid::Uuid;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn request(tag: &str, create_missing: bool) -> ColorKitchenImportRequest {
        let dye = format!("red {}", tag);
        let aux = format!("thickener {}", tag);
        let opj = format!("OPJ-{}", tag);
        let design = format!("DS-{}", tag);
        ColorKitchenImportRequest {
            sheet: SheetRowsRequest {
                file_name: "lap-ck.xlsx".into(),
                sheet_name: Some("TEMPLATE QTY".into()),
                rows: vec![
                    row(&[]),
                    row(&[]),
                    row(&["OPJ", "DESIGN", "JENIS KAIN", "ROLL", "TGL", "DYESTUFF", "AUXILIARIES", ""]),
                    row(&["", "", "", "", "", "", "", "JUMLAH PASTA"]),
                    row(&["", "", "", "", "", &dye, &aux, ""]),
                    row(&[&opj, &design, "katun", "4", "2025-08-05", "1,5", "3", "25"]),
                ],
                as_of_date: None,
            },
            create_missing,
        }
    }

    #[tokio::test]
    async fn test_unknown_names_reject_the_file() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string()[..10].to_uppercase();

        match import(request(&tag, false)).await {
            Err(ServiceError::Validation(message)) => assert_eq!(
                message,
                format!(
                    "Missing products: RED {tag}, THICKENER {tag} | Missing designs: DS-{tag}"
                )
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
        let code = format!("BATCH-OPJ-{}-2025-08-05", tag);
        assert!(a009_color_kitchen_batch::repository::find_by_code(&code)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_import_creates_and_posts_batch_and_entry() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string()[..10].to_uppercase();

        let response = import(request(&tag, true)).await.unwrap();
        assert_eq!(response.batches, 1);
        assert_eq!(response.entries, 1);
        assert_eq!(
            response.created_products,
            vec![format!("RED {}", tag), format!("THICKENER {}", tag)]
        );
        assert_eq!(response.created_designs, vec![format!("DS-{}", tag)]);
        assert!(response.errors.is_empty());

        let code = format!("BATCH-OPJ-{}-2025-08-05", tag);
        let batch = a009_color_kitchen_batch::repository::find_by_code(&code)
            .await
            .unwrap()
            .unwrap();
        assert!(batch.base.metadata.is_posted);
        assert_eq!(batch.dyes.len(), 1);
        assert_eq!(batch.dyes[0].quantity, 1.5);
        let batch_ledger = p900_stock_ledger::service::entries_of(&batch.to_string_id())
            .await
            .unwrap();
        // kitchen out, usage in
        assert_eq!(batch_ledger.len(), 2);
        let taken: f64 = batch_ledger.iter().map(|e| e.quantity_out).sum();
        assert_eq!(taken, 1.5);
        assert_eq!(
            a010_color_kitchen_entry::repository::count_by_batch(&batch.to_string_id())
                .await
                .unwrap(),
            1
        );

        // a second run finds the batch and writes nothing
        let again = import(request(&tag, false)).await.unwrap();
        assert_eq!(again.batches, 0);
        assert_eq!(again.entries, 0);
        assert_eq!(again.errors.len(), 1);
        assert_eq!(again.errors[0].row, 6);
        assert_eq!(again.errors[0].reason, format!("batch {} already exists", code));
    }
}
