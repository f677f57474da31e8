use axum::extract::Query;
use axum::Json;
use contracts::dashboards::common::DateRangeQuery;
use contracts::dashboards::d401_purchasing::{
    ProductInsights, PurchasingReportSummary, PurchasingTrend, SupplierInsights, TrendQuery,
};

use crate::dashboards::d401_purchasing::service;
use crate::shared::error::ServiceResult;

/// GET /api/d401_purchasing/summary
pub async fn summary(
    Query(range): Query<DateRangeQuery>,
) -> ServiceResult<Json<PurchasingReportSummary>> {
    Ok(Json(service::get_summary(range).await?))
}

/// GET /api/d401_purchasing/trend?granularity=day|week|month
pub async fn trend(Query(query): Query<TrendQuery>) -> ServiceResult<Json<PurchasingTrend>> {
    Ok(Json(service::get_trend(query).await?))
}

/// GET /api/d401_purchasing/suppliers
pub async fn suppliers(
    Query(range): Query<DateRangeQuery>,
) -> ServiceResult<Json<SupplierInsights>> {
    Ok(Json(service::get_supplier_insights(range).await?))
}

/// GET /api/d401_purchasing/products
pub async fn products(Query(range): Query<DateRangeQuery>) -> ServiceResult<Json<ProductInsights>> {
    Ok(Json(service::get_product_insights(range).await?))
}
