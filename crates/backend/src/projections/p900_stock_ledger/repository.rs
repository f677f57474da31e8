use anyhow::Result;
use chrono::Utc;
use contracts::projections::p900_stock_ledger::{
    LedgerDraft, LedgerListQuery, LedgerRefType, StockBalanceQuery,
};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ConnectionTrait, FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, Set, Statement, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;
use crate::shared::list::{date_range_condition, search_condition};

/// Stock movement entry, keyed by the document that produced it
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "p900_stock_ledger")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub registrator_ref: String,
    pub registrator_type: String,
    pub ref_code: String,
    pub entry_date: String,
    pub location: String,
    pub product_ref: String,
    pub quantity_in: f64,
    pub quantity_out: f64,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Header of the document being posted
#[derive(Debug, Clone)]
pub struct Registrator<'a> {
    pub ref_type: LedgerRefType,
    pub id: &'a str,
    pub code: &'a str,
    pub date: &'a str,
}

/// Writes ledger entries for a registrator
pub async fn insert_entries<C: ConnectionTrait>(
    db: &C,
    registrator: &Registrator<'_>,
    drafts: &[LedgerDraft],
) -> Result<u64> {
    let now = Utc::now().to_rfc3339();
    for draft in drafts {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            registrator_ref: Set(registrator.id.to_string()),
            registrator_type: Set(registrator.ref_type.as_str().to_string()),
            ref_code: Set(registrator.code.to_string()),
            entry_date: Set(registrator.date.to_string()),
            location: Set(draft.location.as_str().to_string()),
            product_ref: Set(draft.product_ref.clone()),
            quantity_in: Set(draft.quantity_in),
            quantity_out: Set(draft.quantity_out),
            created_at: Set(now.clone()),
        };
        active.insert(db).await?;
    }
    Ok(drafts.len() as u64)
}

/// Drops the previous entries of the registrator and writes the new ones
pub async fn replace_entries(registrator: &Registrator<'_>, drafts: &[LedgerDraft]) -> Result<u64> {
    let txn = conn().begin().await?;

    Entity::delete_many()
        .filter(Column::RegistratorRef.eq(registrator.id))
        .exec(&txn)
        .await?;
    let written = insert_entries(&txn, registrator, drafts).await?;

    txn.commit().await?;
    Ok(written)
}

pub async fn delete_by_registrator(registrator_ref: &str) -> Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::RegistratorRef.eq(registrator_ref))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}

pub async fn get_by_registrator(registrator_ref: &str) -> Result<Vec<Model>> {
    let items = Entity::find()
        .filter(Column::RegistratorRef.eq(registrator_ref))
        .order_by_asc(Column::Location)
        .all(conn())
        .await?;
    Ok(items)
}

pub async fn list_with_filters(query: &LedgerListQuery) -> Result<(Vec<Model>, u64)> {
    let list_query = query.list_query().normalized();

    let mut select = Entity::find().filter(date_range_condition(&list_query, Column::EntryDate));
    if let Some(cond) = search_condition(&list_query, &[Column::RefCode]) {
        select = select.filter(cond);
    }
    if let Some(product) = query.product_ref.as_deref().filter(|s| !s.is_empty()) {
        select = select.filter(Column::ProductRef.eq(product));
    }
    if let Some(location) = query.location.as_deref().filter(|s| !s.is_empty()) {
        select = select.filter(Column::Location.eq(location));
    }
    if let Some(ref_type) = query.ref_type.as_deref().filter(|s| !s.is_empty()) {
        select = select.filter(Column::RegistratorType.eq(ref_type));
    }

    let total = select.clone().count(conn()).await?;
    let items = select
        .order_by_desc(Column::EntryDate)
        .order_by_asc(Column::RefCode)
        .offset(list_query.offset())
        .limit(list_query.page_size())
        .all(conn())
        .await?;
    Ok((items, total))
}

/// Entries of one registrator type inside a date range, for reports
pub async fn list_by_type(ref_type: LedgerRefType, start: Option<&str>, end: Option<&str>) -> Result<Vec<Model>> {
    let mut select = Entity::find().filter(Column::RegistratorType.eq(ref_type.as_str()));
    if let Some(start) = start {
        select = select.filter(Column::EntryDate.gte(start));
    }
    if let Some(end) = end {
        select = select.filter(Column::EntryDate.lte(end));
    }
    Ok(select.order_by_asc(Column::EntryDate).all(conn()).await?)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct BalanceRow {
    pub product_ref: String,
    pub location: String,
    pub quantity_in: f64,
    pub quantity_out: f64,
}

/// Σin and Σout per (product, location) up to the cut-off date
pub async fn balances(query: &StockBalanceQuery) -> Result<Vec<BalanceRow>> {
    let mut sql = String::from(
        r#"
        SELECT
            product_ref,
            location,
            COALESCE(SUM(quantity_in), 0) AS quantity_in,
            COALESCE(SUM(quantity_out), 0) AS quantity_out
        FROM p900_stock_ledger
        WHERE 1 = 1
    "#,
    );
    let mut values: Vec<sea_orm::Value> = Vec::new();

    if let Some(date) = query.date.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(" AND entry_date <= ?");
        values.push(date.into());
    }
    if let Some(product) = query.product_ref.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(" AND product_ref = ?");
        values.push(product.into());
    }
    if let Some(location) = query.location.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(" AND location = ?");
        values.push(location.into());
    }
    sql.push_str(" GROUP BY product_ref, location ORDER BY product_ref, location");

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, values);
    Ok(BalanceRow::find_by_statement(stmt).all(conn()).await?)
}
