use super::repository::{self, BalanceRow, Registrator};
use anyhow::Result;
use contracts::projections::p900_stock_ledger::{
    LedgerDraft, LedgerEntryDto, LedgerListQuery, LedgerLocation, LedgerRefType, StockBalance,
    StockBalanceQuery,
};
use contracts::shared::list::{ListResponse, PageMeta};
use std::collections::HashMap;

/// Replaces the ledger entries of a document
pub async fn post(registrator: &Registrator<'_>, drafts: &[LedgerDraft]) -> Result<()> {
    let written = repository::replace_entries(registrator, drafts).await?;
    tracing::info!(
        "Posted {} {} into stock ledger ({} entries)",
        registrator.ref_type.as_str(),
        registrator.code,
        written
    );
    Ok(())
}

pub async fn unpost(registrator_ref: &str) -> Result<()> {
    let removed = repository::delete_by_registrator(registrator_ref).await?;
    if removed > 0 {
        tracing::info!("Removed {} stock ledger entries of {}", removed, registrator_ref);
    }
    Ok(())
}

fn to_dto(m: repository::Model, names: &HashMap<String, String>) -> Option<LedgerEntryDto> {
    let Some(registrator_type) = LedgerRefType::parse(&m.registrator_type) else {
        tracing::warn!("Unknown registrator type {} in ledger entry {}", m.registrator_type, m.id);
        return None;
    };
    let Some(location) = LedgerLocation::parse(&m.location) else {
        tracing::warn!("Unknown location {} in ledger entry {}", m.location, m.id);
        return None;
    };
    Some(LedgerEntryDto {
        product_name: names.get(&m.product_ref).cloned(),
        id: m.id,
        registrator_ref: m.registrator_ref,
        registrator_type,
        ref_code: m.ref_code,
        entry_date: m.entry_date,
        location,
        product_ref: m.product_ref,
        quantity_in: m.quantity_in,
        quantity_out: m.quantity_out,
        created_at: m.created_at,
    })
}

pub async fn list(query: LedgerListQuery) -> Result<ListResponse<LedgerEntryDto>> {
    let (rows, total) = repository::list_with_filters(&query).await?;
    let names = crate::domain::a002_product::repository::name_map().await?;
    let items = rows.into_iter().filter_map(|m| to_dto(m, &names)).collect();
    let meta = PageMeta::for_query(&query.list_query(), total);
    Ok(ListResponse::new(items, meta))
}

pub async fn entries_of(registrator_ref: &str) -> Result<Vec<LedgerEntryDto>> {
    let rows = repository::get_by_registrator(registrator_ref).await?;
    let names = crate::domain::a002_product::repository::name_map().await?;
    Ok(rows.into_iter().filter_map(|m| to_dto(m, &names)).collect())
}

pub(crate) fn to_balances(rows: Vec<BalanceRow>, names: &HashMap<String, String>) -> Vec<StockBalance> {
    rows.into_iter()
        .filter_map(|r| {
            let location = LedgerLocation::parse(&r.location)?;
            Some(StockBalance {
                product_name: names.get(&r.product_ref).cloned(),
                balance: r.quantity_in - r.quantity_out,
                product_ref: r.product_ref,
                location,
                quantity_in: r.quantity_in,
                quantity_out: r.quantity_out,
            })
        })
        .collect()
}

pub async fn balances(query: StockBalanceQuery) -> Result<Vec<StockBalance>> {
    let rows = repository::balances(&query).await?;
    let names = crate::domain::a002_product::repository::name_map().await?;
    Ok(to_balances(rows, &names))
}

/// Warehouse quantity of a product as of the given date
pub async fn gudang_balance(product_ref: &str, date: &str) -> Result<f64> {
    let rows = repository::balances(&StockBalanceQuery {
        date: Some(date.to_string()),
        product_ref: Some(product_ref.to_string()),
        location: Some(LedgerLocation::Gudang.as_str().to_string()),
    })
    .await?;
    Ok(rows.iter().map(|r| r.quantity_in - r.quantity_out).sum())
}

/// Warehouse quantity of every product as of the given date
pub async fn gudang_balances(date: &str) -> Result<HashMap<String, f64>> {
    let rows = repository::balances(&StockBalanceQuery {
        date: Some(date.to_string()),
        product_ref: None,
        location: Some(LedgerLocation::Gudang.as_str().to_string()),
    })
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| (r.product_ref, r.quantity_in - r.quantity_out))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_balances_skips_unknown_locations() {
        let rows = vec![
            BalanceRow {
                product_ref: "p".into(),
                location: "gudang".into(),
                quantity_in: 10.0,
                quantity_out: 4.0,
            },
            BalanceRow {
                product_ref: "p".into(),
                location: "attic".into(),
                quantity_in: 1.0,
                quantity_out: 0.0,
            },
        ];
        let names = HashMap::from([("p".to_string(), "DYE".to_string())]);
        let balances = to_balances(rows, &names);
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].balance, 6.0);
        assert_eq!(balances[0].product_name.as_deref(), Some("DYE"));
    }
}
