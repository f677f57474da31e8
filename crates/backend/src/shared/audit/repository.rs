use chrono::Utc;
use contracts::shared::audit::{AuditAction, AuditEntry, AuditQuery};
use contracts::shared::list::{page_offset, ListResponse, PageMeta, MAX_PAGE};
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub table_name: String,
    pub record_id: String,
    pub action: String,
    pub old_data: Option<String>,
    pub new_data: Option<String>,
    pub changed_by: String,
    pub changed_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AuditEntry {
    fn from(m: Model) -> Self {
        AuditEntry {
            id: m.id,
            table_name: m.table_name,
            record_id: m.record_id,
            action: m.action,
            old_data: m.old_data.and_then(|s| serde_json::from_str(&s).ok()),
            new_data: m.new_data.and_then(|s| serde_json::from_str(&s).ok()),
            changed_by: m.changed_by,
            changed_at: m.changed_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(
    table_name: &str,
    record_id: &str,
    action: AuditAction,
    old_data: Option<String>,
    new_data: Option<String>,
) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        table_name: Set(table_name.to_string()),
        record_id: Set(record_id.to_string()),
        action: Set(action.as_str().to_string()),
        old_data: Set(old_data),
        new_data: Set(new_data),
        changed_by: Set("system".to_string()),
        changed_at: Set(Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn list(query: &AuditQuery) -> anyhow::Result<ListResponse<AuditEntry>> {
    let mut select = Entity::find();
    if let Some(table) = query.table_name.as_deref().filter(|t| !t.is_empty()) {
        select = select.filter(Column::TableName.eq(table));
    }
    if let Some(record) = query.record_id.as_deref().filter(|r| !r.is_empty()) {
        select = select.filter(Column::RecordId.eq(record));
    }

    let page = query.page.unwrap_or(1).clamp(1, MAX_PAGE);
    let page_size = query.page_size.unwrap_or(20).clamp(1, 100);
    let total = select.clone().count(conn()).await?;
    let items = select
        .order_by_desc(Column::ChangedAt)
        .offset(page_offset(page, page_size))
        .limit(page_size)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(ListResponse::new(items, PageMeta::new(page, page_size, total)))
}
