use chrono::Utc;
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{DbBackend, PaginatorTrait, QueryOrder, QuerySelect, Set, Statement};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;
use crate::shared::list::search_condition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub unit: Option<String>,
    pub account_ref: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Product {
            base: BaseAggregate::with_metadata(
                ProductId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            unit: m.unit,
            account_ref: m.account_ref,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Product) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        unit: Set(aggregate.unit.clone()),
        account_ref: Set(aggregate.account_ref.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Description)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Product>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(cond) = search_condition(query, &[Column::Code, Column::Description]) {
        select = select.filter(cond);
    }

    let total = select.clone().count(conn()).await?;

    let desc = query.sort_desc.unwrap_or(false);
    let column = match query.sort_by.as_deref() {
        Some("code") => Column::Code,
        Some("unit") => Column::Unit,
        _ => Column::Description,
    };
    select = if desc {
        select.order_by_desc(column)
    } else {
        select.order_by_asc(column)
    };

    let items = select
        .offset(query.offset())
        .limit(query.page_size())
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok((items, total))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// `name` must already be normalized
pub async fn find_by_name(name: &str) -> anyhow::Result<Option<Product>> {
    let result = Entity::find()
        .filter(Column::Description.eq(name))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn find_by_code(code: &str) -> anyhow::Result<Option<Product>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Normalized name → id of every active product
pub async fn id_by_name() -> anyhow::Result<HashMap<String, String>> {
    let rows = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(|m| (m.description, m.id)).collect())
}

/// id → name, deleted products included so old documents still show names
pub async fn name_map() -> anyhow::Result<HashMap<String, String>> {
    let rows = Entity::find().all(conn()).await?;
    Ok(rows.into_iter().map(|m| (m.id, m.description)).collect())
}

pub async fn count_by_accounts(account_refs: &[String]) -> anyhow::Result<u64> {
    if account_refs.is_empty() {
        return Ok(0);
    }
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::AccountRef.is_in(account_refs.iter().cloned()))
        .count(conn())
        .await?;
    Ok(count)
}

/// Number of active documents whose lines mention the product
pub async fn count_document_references(product_id: &str) -> anyhow::Result<i64> {
    let pattern = format!("%\"{}\"%", product_id);
    let sql = r#"
        SELECT
            (SELECT COUNT(*) FROM a007_purchasing WHERE is_deleted = 0 AND lines_json LIKE ?) +
            (SELECT COUNT(*) FROM a008_stock_movement WHERE is_deleted = 0 AND lines_json LIKE ?) +
            (SELECT COUNT(*) FROM a009_color_kitchen_batch WHERE is_deleted = 0 AND lines_json LIKE ?) +
            (SELECT COUNT(*) FROM a010_color_kitchen_entry WHERE is_deleted = 0 AND lines_json LIKE ?) +
            (SELECT COUNT(*) FROM a011_stock_opname WHERE is_deleted = 0 AND lines_json LIKE ?)
            AS total
    "#;
    let values: Vec<sea_orm::Value> = (0..5).map(|_| pattern.clone().into()).collect();
    let row = conn()
        .query_one(Statement::from_sql_and_values(DbBackend::Sqlite, sql, values))
        .await?;
    let total = match row {
        Some(row) => row.try_get::<i64>("", "total")?,
        None => 0,
    };
    Ok(total)
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Product) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// account_ref → number of active products
pub async fn count_per_account() -> anyhow::Result<HashMap<String, u64>> {
    let rows = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::AccountRef.is_not_null())
        .all(conn())
        .await?;
    let mut counts: HashMap<String, u64> = HashMap::new();
    for account in rows.into_iter().filter_map(|m| m.account_ref) {
        *counts.entry(account).or_default() += 1;
    }
    Ok(counts)
}
