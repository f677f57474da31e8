use chrono::Utc;
use contracts::domain::a009_color_kitchen_batch::{ColorKitchenBatch, ColorKitchenBatchId, ConsumptionLine};
use contracts::domain::common::{lines_to_json, parse_lines, BaseAggregate, EntityMetadata};
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;
use crate::shared::list::{date_range_condition, search_condition};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a009_color_kitchen_batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub document_date: String,
    pub lines_json: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ColorKitchenBatch {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let dyes: Vec<ConsumptionLine> = parse_lines(m.lines_json.as_deref());

        ColorKitchenBatch {
            base: BaseAggregate::with_metadata(
                ColorKitchenBatchId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            document_date: m.document_date,
            dyes,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ColorKitchenBatch) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        document_date: Set(aggregate.document_date.clone()),
        lines_json: Set(lines_to_json(&aggregate.dyes)),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<ColorKitchenBatch>, u64)> {
    let mut select = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(date_range_condition(query, Column::DocumentDate));
    if let Some(cond) = search_condition(query, &[Column::Code, Column::Description]) {
        select = select.filter(cond);
    }

    let total = select.clone().count(conn()).await?;

    let column = match query.sort_by.as_deref() {
        Some("code") => Column::Code,
        _ => Column::DocumentDate,
    };
    select = if query.sort_desc.unwrap_or(true) {
        select.order_by_desc(column).order_by_desc(Column::Code)
    } else {
        select.order_by_asc(column).order_by_asc(Column::Code)
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ColorKitchenBatch>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn find_by_code(code: &str) -> anyhow::Result<Option<ColorKitchenBatch>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn list_all() -> anyhow::Result<Vec<ColorKitchenBatch>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::DocumentDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// id → code
pub async fn code_map() -> anyhow::Result<HashMap<String, String>> {
    let rows = Entity::find().all(conn()).await?;
    Ok(rows.into_iter().map(|m| (m.id, m.code)).collect())
}

pub async fn list_posted(start: Option<&str>, end: Option<&str>) -> anyhow::Result<Vec<ColorKitchenBatch>> {
    let mut select = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::IsPosted.eq(true));
    if let Some(start) = start {
        select = select.filter(Column::DocumentDate.gte(start));
    }
    if let Some(end) = end {
        select = select.filter(Column::DocumentDate.lte(end));
    }
    let items = select
        .order_by_asc(Column::DocumentDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(aggregate: &ColorKitchenBatch) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &ColorKitchenBatch) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn set_posted(id: Uuid, posted: bool) -> anyhow::Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::IsPosted, Expr::value(posted))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::IsPosted, Expr::value(false))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
