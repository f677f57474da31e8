use super::parser::{
    opening_code, parse_rows, PURCHASE_ORDER, SYSTEM_SUPPLIER_CODE, SYSTEM_SUPPLIER_NAME,
};
use crate::domain::{a001_supplier, a002_product, a007_purchasing};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use crate::usecases::resolve_as_of_date;
use contracts::domain::a007_purchasing::{Purchasing, PurchasingLine};
use contracts::usecases::common::{CreatedDocument, SheetRowsRequest};
use contracts::usecases::u504_import_opening_balance::OpeningBalanceResponse;

/// Books the opening stock as one purchasing from the SYSTEM supplier
pub async fn import(request: SheetRowsRequest) -> ServiceResult<OpeningBalanceResponse> {
    let parsed = parse_rows(&request.rows).map_err(ServiceError::Validation)?;
    let date = resolve_as_of_date(request.as_of_date.as_deref())?
        .format("%Y-%m-%d")
        .to_string();
    let code = opening_code(&date);

    if a007_purchasing::repository::find_by_code(&code).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Opening balance {} already exists",
            code
        )));
    }

    let (supplier_id, _) =
        a001_supplier::service::get_or_create(SYSTEM_SUPPLIER_CODE, SYSTEM_SUPPLIER_NAME).await?;
    let products = a002_product::repository::id_by_name().await?;

    let mut skipped = Vec::new();
    let mut lines = Vec::new();
    for r in parsed.rows {
        let Some(product_ref) = products.get(&r.product_name) else {
            skipped.push(r.product_name);
            continue;
        };
        let mut line = PurchasingLine {
            product_ref: product_ref.clone(),
            quantity: r.quantity,
            price: r.price,
            ppn: r.ppn,
            ..Default::default()
        };
        line.recalculate();
        lines.push(line);
    }

    if lines.is_empty() {
        tracing::warn!("u504 {}: no known products, nothing imported", request.file_name);
        return Ok(OpeningBalanceResponse {
            document: None,
            total_value: 0.0,
            skipped,
            errors: parsed.errors,
        });
    }

    let line_count = lines.len();
    let total_value: f64 = lines.iter().map(|l| l.dpp + l.ppn).sum();
    let mut doc = Purchasing::new_for_insert(
        &code,
        &date,
        supplier_id.to_string(),
        Some(PURCHASE_ORDER.to_string()),
        lines,
    );
    doc.validate().map_err(ServiceError::Validation)?;
    doc.before_write();
    let id = a007_purchasing::repository::insert(&doc).await?;
    a007_purchasing::posting::post_document(id).await?;

    let message = format!(
        "u504 {}: {} with {} lines, total {:.2}, {} products skipped, {} rows rejected",
        request.file_name,
        code,
        line_count,
        total_value,
        skipped.len(),
        parsed.errors.len()
    );
    tracing::info!("{}", message);
    logger::log("import", &message);

    Ok(OpeningBalanceResponse {
        document: Some(CreatedDocument {
            id: id.to_string(),
            code,
            document_date: date,
            lines: line_count,
        }),
        total_value,
        skipped,
        errors: parsed.errors,
    })
}
