use super::repository;
use super::staging::{
    stage_sheet, ParsedAccount, ParsedProduct, ParsedPurchasing, ParsedSupplier, PREVIEW_LIMIT,
};
use crate::domain::{a001_supplier, a002_product, a003_account, a007_purchasing};
use crate::projections::p901_product_avg_cost;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use contracts::domain::a007_purchasing::{Purchasing, PurchasingLine};
use contracts::shared::list::PageMeta;
use contracts::usecases::common::WorkbookUpload;
use contracts::usecases::u501_import_purchasing::{
    CommitCounts, CommitResponse, ImportTarget, PreviewPage, PreviewPageQuery, PreviewSummary,
    SheetStageResult, StagedRowDto, StagedStatus, UploadResponse,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Step 1: stages every sheet of the workbook under a new session
pub async fn upload(request: WorkbookUpload) -> anyhow::Result<UploadResponse> {
    let session_id = Uuid::new_v4().to_string();
    let mut sheets = Vec::new();
    let mut all_rows = Vec::new();

    for sheet in &request.sheets {
        let staged = stage_sheet(&sheet.rows);
        let rows: Vec<StagedRowDto> = staged
            .rows
            .into_iter()
            .map(|r| StagedRowDto {
                id: Uuid::new_v4().to_string(),
                session_id: session_id.clone(),
                sheet_name: sheet.name.clone(),
                table_target: r.target,
                row_number: r.row_number,
                raw_data: r.raw_data,
                parsed_data: r.parsed_data,
                status: r.status,
                reason: r.reason,
            })
            .collect();

        let valid_rows = rows
            .iter()
            .filter(|r| r.status == StagedStatus::Valid)
            .count();
        let preview_rows = rows
            .iter()
            .filter(|r| r.table_target == ImportTarget::Purchasing)
            .take(PREVIEW_LIMIT)
            .cloned()
            .collect();
        sheets.push(SheetStageResult {
            sheet_name: sheet.name.clone(),
            header_row: staged.header_index + 1,
            valid_rows,
            skipped_rows: rows.len() - valid_rows,
            preview_rows,
        });
        all_rows.extend(rows);
    }

    repository::insert_many(&all_rows).await?;
    tracing::info!(
        "Staged {} rows from {} ({} sheets) as session {}",
        all_rows.len(),
        request.file_name,
        sheets.len(),
        session_id
    );

    Ok(UploadResponse {
        session_id,
        file_name: request.file_name,
        sheets,
    })
}

async fn ensure_session(session_id: &str) -> ServiceResult<()> {
    if repository::session_exists(session_id).await? {
        Ok(())
    } else {
        Err(ServiceError::not_found("Import session", session_id))
    }
}

/// Step 2a: counts per target
pub async fn summary(session_id: &str) -> ServiceResult<PreviewSummary> {
    ensure_session(session_id).await?;
    Ok(PreviewSummary {
        session_id: session_id.to_string(),
        targets: repository::summary(session_id).await?,
    })
}

/// Step 2b: staged rows of one target, paginated
pub async fn preview_page(
    session_id: &str,
    target: &str,
    query: PreviewPageQuery,
) -> ServiceResult<PreviewPage> {
    let target = ImportTarget::parse(target)
        .ok_or_else(|| ServiceError::Validation(format!("Unknown import target: {}", target)))?;
    ensure_session(session_id).await?;

    let (rows, total) =
        repository::page(session_id, target, query.page(), query.per_page()).await?;
    Ok(PreviewPage {
        target,
        items: rows.iter().filter_map(repository::Model::to_dto).collect(),
        meta: PageMeta::new(query.page(), query.per_page(), total),
    })
}

fn parse_staged<T: DeserializeOwned>(
    row: &repository::Model,
    warnings: &mut Vec<String>,
) -> Option<T> {
    match serde_json::from_str(&row.parsed_data) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warnings.push(format!(
                "{} row {}: unreadable staged data ({})",
                row.sheet_name, row.row_number, e
            ));
            None
        }
    }
}

/// Step 3: writes accounts, suppliers, products, then purchasing documents
pub async fn commit(session_id: &str) -> ServiceResult<CommitResponse> {
    ensure_session(session_id).await?;

    let mut inserted = CommitCounts::default();
    let mut warnings = Vec::new();

    for row in repository::valid_rows(session_id, ImportTarget::Account).await? {
        let Some(parsed) = parse_staged::<ParsedAccount>(&row, &mut warnings) else {
            continue;
        };
        let Some(account_no) = parsed.account_no else {
            continue;
        };
        let (_, created) = a003_account::service::get_or_create(account_no, &parsed.name).await?;
        if created {
            inserted.accounts += 1;
        }
    }

    for row in repository::valid_rows(session_id, ImportTarget::Supplier).await? {
        let Some(parsed) = parse_staged::<ParsedSupplier>(&row, &mut warnings) else {
            continue;
        };
        let (_, created) = a001_supplier::service::get_or_create(&parsed.code, &parsed.name).await?;
        if created {
            inserted.suppliers += 1;
        }
    }

    let accounts = a003_account::repository::id_by_no().await?;
    for row in repository::valid_rows(session_id, ImportTarget::Product).await? {
        let Some(parsed) = parse_staged::<ParsedProduct>(&row, &mut warnings) else {
            continue;
        };
        let Some(account_ref) = parsed.account_no.and_then(|no| accounts.get(&no)).cloned() else {
            continue;
        };
        let (_, created) =
            a002_product::service::get_or_create(&parsed.name, parsed.unit.clone(), Some(account_ref))
                .await?;
        if created {
            inserted.products += 1;
        }
    }

    let mut groups: BTreeMap<(String, String), Vec<(i32, ParsedPurchasing)>> = BTreeMap::new();
    for row in repository::valid_rows(session_id, ImportTarget::Purchasing).await? {
        if let Some(parsed) = parse_staged::<ParsedPurchasing>(&row, &mut warnings) {
            groups
                .entry(parsed.group_key())
                .or_default()
                .push((row.row_number, parsed));
        }
    }

    let products = a002_product::repository::id_by_name().await?;
    for ((supplier_code, doc_key), rows) in groups {
        let Some(supplier) = a001_supplier::repository::find_by_code(&supplier_code).await? else {
            warnings.push(format!("{}: supplier {} not found", doc_key, supplier_code));
            continue;
        };
        let Some(date) = rows.iter().find_map(|(_, p)| p.tanggal.clone()) else {
            warnings.push(format!("{}: no TANGGAL on any row", doc_key));
            continue;
        };
        let code = rows
            .iter()
            .find_map(|(_, p)| p.no_bukti.clone())
            .unwrap_or_else(|| format!("{}-{}", supplier_code, date.replace('-', "")));
        let supplier_ref = supplier.to_string_id();

        if a007_purchasing::repository::find_by_supplier_and_code(&supplier_ref, &code)
            .await?
            .is_some()
        {
            warnings.push(format!("{}: already imported", code));
            continue;
        }

        let mut lines = Vec::new();
        for (row_number, p) in &rows {
            let Some(product_ref) = products.get(&p.product_name) else {
                warnings.push(format!("row {}: product {} not found", row_number, p.product_name));
                continue;
            };
            lines.push(PurchasingLine {
                product_ref: product_ref.clone(),
                quantity: p.qty,
                price: p.price,
                discount: p.discount,
                ppn: p.ppn,
                pph: p.pph,
                tax_no: p.tax_no.clone(),
                exchange_rate: p.exchange_rate,
                ..Default::default()
            });
        }
        if lines.is_empty() {
            continue;
        }

        let purchase_order = rows.iter().find_map(|(_, p)| p.no_po.clone());
        let line_count = lines.len();
        let mut doc = Purchasing::new_for_insert(&code, &date, supplier_ref, purchase_order, lines);
        if let Err(e) = doc.validate() {
            warnings.push(format!("{}: {}", code, e));
            continue;
        }
        doc.before_write();
        let id = a007_purchasing::repository::insert(&doc).await?;
        a007_purchasing::posting::post_ledger(id).await?;
        inserted.purchasing_headers += 1;
        inserted.purchasing_lines += line_count;
    }

    if inserted.purchasing_headers > 0 {
        p901_product_avg_cost::service::recompute().await?;
    }

    let message = format!(
        "u501 commit {}: {} accounts, {} suppliers, {} products, {} purchasing ({} lines)",
        session_id,
        inserted.accounts,
        inserted.suppliers,
        inserted.products,
        inserted.purchasing_headers,
        inserted.purchasing_lines
    );
    tracing::info!("{}", message);
    logger::log("import", &message);

    Ok(CommitResponse {
        session_id: session_id.to_string(),
        summary: repository::summary(session_id).await?,
        inserted,
        warnings,
    })
}

/// Drops a staged session
pub async fn discard(session_id: &str) -> ServiceResult<()> {
    let removed = repository::delete_session(session_id).await?;
    if removed == 0 {
        return Err(ServiceError::not_found("Import session", session_id));
    }
    tracing::info!("Discarded import session {} ({} rows)", session_id, removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_database;
    use contracts::usecases::common::SheetData;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn workbook(tag: &str) -> WorkbookUpload {
        let supplier = format!("S{}", tag);
        let product = format!("reactive {}", tag);
        let no_bukti = format!("NB-{}", tag);
        WorkbookUpload {
            file_name: "pembelian.xlsx".into(),
            sheets: vec![SheetData {
                name: "JULI".into(),
                rows: vec![
                    row(&["LAPORAN PEMBELIAN"]),
                    row(&[
                        "NO.ACC", "ACCOUNT", "NAMA BARANG", "SATUAN", "KODE SUPPLIER", "SUPPLIER",
                        "QTY", "HARGA SAT", "NO.BUKTI", "TANGGAL",
                    ]),
                    row(&[
                        "1401", "BAHAN KIMIA", &product, "KG", &supplier, "PT WARNA", "10", "5000",
                        &no_bukti, "2025-07-01",
                    ]),
                    row(&[
                        "1401", "BAHAN KIMIA", &product, "KG", &supplier, "PT WARNA", "5", "6500",
                        &no_bukti, "2025-07-01",
                    ]),
                ],
            }],
        }
    }

    #[tokio::test]
    async fn test_commit_twice_imports_once() {
        let _db = test_database().await;
        let tag = Uuid::new_v4().simple().to_string()[..12].to_uppercase();
        let uploaded = upload(workbook(&tag)).await.unwrap();

        let first = commit(&uploaded.session_id).await.unwrap();
        assert_eq!(first.inserted.suppliers, 1);
        assert_eq!(first.inserted.products, 1);
        assert_eq!(first.inserted.purchasing_headers, 1);
        assert_eq!(first.inserted.purchasing_lines, 2);

        let second = commit(&uploaded.session_id).await.unwrap();
        assert_eq!(second.inserted, CommitCounts::default());
        assert!(second
            .warnings
            .iter()
            .any(|w| w == &format!("NB-{}: already imported", tag)));

        let product_ref = a002_product::repository::find_by_name(&format!("REACTIVE {}", tag))
            .await
            .unwrap()
            .unwrap()
            .to_string_id();
        let avg = p901_product_avg_cost::service::avg_cost_of(&product_ref).await.unwrap();
        assert_eq!(avg, 5500.0);

        discard(&uploaded.session_id).await.unwrap();
        assert!(matches!(
            summary(&uploaded.session_id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_commit_unknown_session_is_not_found() {
        let _db = test_database().await;
        let result = commit(&Uuid::new_v4().to_string()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
