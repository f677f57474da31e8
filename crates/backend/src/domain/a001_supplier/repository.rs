use chrono::Utc;
use contracts::domain::a001_supplier::{Supplier, SupplierId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;
use crate::shared::list::search_condition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_supplier")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub contact_info: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Supplier {
            base: BaseAggregate::with_metadata(
                SupplierId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            contact_info: m.contact_info,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Supplier) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        contact_info: Set(aggregate.contact_info.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Supplier>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Code)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Supplier>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(cond) = search_condition(
        query,
        &[Column::Code, Column::Description, Column::ContactInfo],
    ) {
        select = select.filter(cond);
    }

    let total = select.clone().count(conn()).await?;

    let desc = query.sort_desc.unwrap_or(false);
    let column = match query.sort_by.as_deref() {
        Some("description") => Column::Description,
        Some("updated_at") => Column::UpdatedAt,
        _ => Column::Code,
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Supplier>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn find_by_code(code: &str) -> anyhow::Result<Option<Supplier>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Supplier) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Supplier) -> anyhow::Result<()> {
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

/// id → name
pub async fn name_map() -> anyhow::Result<HashMap<String, String>> {
    let rows = Entity::find().all(conn()).await?;
    Ok(rows.into_iter().map(|m| (m.id, m.description)).collect())
}

/// Ids of suppliers whose code or name contains `q`
pub async fn search_ids(q: &str) -> anyhow::Result<Vec<String>> {
    let rows = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(
            sea_orm::Condition::any()
                .add(Column::Code.contains(q))
                .add(Column::Description.contains(q)),
        )
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(|m| m.id).collect())
}
