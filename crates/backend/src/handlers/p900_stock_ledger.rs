use axum::extract::Query;
use axum::Json;
use contracts::projections::p900_stock_ledger::{
    LedgerEntryDto, LedgerListQuery, StockBalance, StockBalanceQuery,
};
use contracts::shared::list::ListResponse;

use crate::projections::p900_stock_ledger::service;
use crate::shared::error::ServiceResult;

/// GET /api/p900_stock_ledger
pub async fn list(
    Query(query): Query<LedgerListQuery>,
) -> ServiceResult<Json<ListResponse<LedgerEntryDto>>> {
    Ok(Json(service::list(query).await?))
}

/// GET /api/p900_stock_ledger/balances?date&product_ref&location
pub async fn balances(
    Query(query): Query<StockBalanceQuery>,
) -> ServiceResult<Json<Vec<StockBalance>>> {
    Ok(Json(service::balances(query).await?))
}
