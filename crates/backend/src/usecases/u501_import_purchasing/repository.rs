use anyhow::Result;
use chrono::Utc;
use contracts::shared::list::page_offset;
use contracts::usecases::u501_import_purchasing::{
    ImportTarget, StagedRowDto, StagedStatus, TargetSummary,
};
use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, Set, Statement, TransactionTrait};

use crate::shared::data::db::get_connection;

/// Staged spreadsheet row of a purchasing import session
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "temp_import")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub session_id: String,
    pub sheet_name: String,
    pub table_target: String,
    pub row_number: i32,
    pub raw_data: String,
    pub parsed_data: String,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

impl Model {
    pub fn to_dto(&self) -> Option<StagedRowDto> {
        Some(StagedRowDto {
            id: self.id.clone(),
            session_id: self.session_id.clone(),
            sheet_name: self.sheet_name.clone(),
            table_target: ImportTarget::parse(&self.table_target)?,
            row_number: self.row_number.max(0) as usize,
            raw_data: serde_json::from_str(&self.raw_data).unwrap_or(serde_json::Value::Null),
            parsed_data: serde_json::from_str(&self.parsed_data)
                .unwrap_or(serde_json::Value::Null),
            status: StagedStatus::parse(&self.status),
            reason: self.reason.clone(),
        })
    }
}

pub async fn insert_many(rows: &[StagedRowDto]) -> Result<()> {
    let txn = conn().begin().await?;
    let now = Utc::now().to_rfc3339();
    for row in rows {
        ActiveModel {
            id: Set(row.id.clone()),
            session_id: Set(row.session_id.clone()),
            sheet_name: Set(row.sheet_name.clone()),
            table_target: Set(row.table_target.as_str().to_string()),
            row_number: Set(row.row_number as i32),
            raw_data: Set(row.raw_data.to_string()),
            parsed_data: Set(row.parsed_data.to_string()),
            status: Set(row.status.as_str().to_string()),
            reason: Set(row.reason.clone()),
            created_at: Set(now.clone()),
        }
        .insert(&txn)
        .await?;
    }
    txn.commit().await?;
    Ok(())
}

/// valid/skipped counts per target, every target present
pub async fn summary(session_id: &str) -> Result<Vec<TargetSummary>> {
    #[derive(Debug, FromQueryResult)]
    struct Row {
        table_target: String,
        status: String,
        count: i64,
    }

    let sql = r#"
        SELECT table_target, status, COUNT(*) AS count
        FROM temp_import
        WHERE session_id = ?
        GROUP BY table_target, status
    "#;
    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [session_id.into()],
    );
    let rows = Row::find_by_statement(stmt).all(conn()).await?;

    let mut out: Vec<TargetSummary> = ImportTarget::ALL
        .into_iter()
        .map(|target| TargetSummary {
            target,
            valid: 0,
            skipped: 0,
        })
        .collect();
    for row in rows {
        let Some(target) = ImportTarget::parse(&row.table_target) else {
            continue;
        };
        if let Some(slot) = out.iter_mut().find(|s| s.target == target) {
            match StagedStatus::parse(&row.status) {
                StagedStatus::Valid => slot.valid += row.count.max(0) as u64,
                StagedStatus::Skipped => slot.skipped += row.count.max(0) as u64,
            }
        }
    }
    Ok(out)
}

pub async fn page(
    session_id: &str,
    target: ImportTarget,
    page: u64,
    per_page: u64,
) -> Result<(Vec<Model>, u64)> {
    let select = Entity::find()
        .filter(Column::SessionId.eq(session_id))
        .filter(Column::TableTarget.eq(target.as_str()));
    let total = select.clone().count(conn()).await?;
    let items = select
        .order_by_asc(Column::SheetName)
        .order_by_asc(Column::RowNumber)
        .offset(page_offset(page, per_page))
        .limit(per_page)
        .all(conn())
        .await?;
    Ok((items, total))
}

pub async fn valid_rows(session_id: &str, target: ImportTarget) -> Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::SessionId.eq(session_id))
        .filter(Column::TableTarget.eq(target.as_str()))
        .filter(Column::Status.eq(StagedStatus::Valid.as_str()))
        .order_by_asc(Column::SheetName)
        .order_by_asc(Column::RowNumber)
        .all(conn())
        .await?)
}

pub async fn session_exists(session_id: &str) -> Result<bool> {
    let count = Entity::find()
        .filter(Column::SessionId.eq(session_id))
        .count(conn())
        .await?;
    Ok(count > 0)
}

pub async fn delete_session(session_id: &str) -> Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::SessionId.eq(session_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}
