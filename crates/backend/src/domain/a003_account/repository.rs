use chrono::Utc;
use contracts::domain::a003_account::{Account, AccountId, AccountType};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;
use crate::shared::list::search_condition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub account_no: i64,
    pub account_type: String,
    pub alias: Option<String>,
    pub parent_ref: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Account {
            base: BaseAggregate::with_metadata(
                AccountId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            account_no: m.account_no,
            account_type: AccountType::parse(&m.account_type),
            alias: m.alias,
            parent_ref: m.parent_ref,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Account) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        account_no: Set(aggregate.account_no),
        account_type: Set(aggregate.account_type.as_str().to_string()),
        alias: Set(aggregate.alias.clone()),
        parent_ref: Set(aggregate.parent_ref.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Account>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::AccountNo)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Account>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(cond) = search_condition(query, &[Column::Code, Column::Description, Column::Alias])
    {
        select = select.filter(cond);
    }

    let total = select.clone().count(conn()).await?;

    let desc = query.sort_desc.unwrap_or(false);
    let column = match query.sort_by.as_deref() {
        Some("description") => Column::Description,
        Some("account_type") => Column::AccountType,
        _ => Column::AccountNo,
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Account>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn find_by_no(account_no: i64) -> anyhow::Result<Option<Account>> {
    let result = Entity::find()
        .filter(Column::AccountNo.eq(account_no))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn list_by_parent(parent_ref: &str) -> anyhow::Result<Vec<Account>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::ParentRef.eq(parent_ref))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// id → name
pub async fn name_map() -> anyhow::Result<HashMap<String, String>> {
    let rows = Entity::find().all(conn()).await?;
    Ok(rows.into_iter().map(|m| (m.id, m.description)).collect())
}

/// account_no → id of every active account
pub async fn id_by_no() -> anyhow::Result<HashMap<i64, String>> {
    let rows = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(|m| (m.account_no, m.id)).collect())
}

pub async fn insert(aggregate: &Account) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Account) -> anyhow::Result<()> {
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
