//! Query helpers shared by the repositories of all aggregates

use contracts::shared::list::ListQuery;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition};

/// `LIKE %q%` over the given columns (SQLite LIKE ignores ASCII case),
/// `None` without search text
pub fn search_condition<C: ColumnTrait>(query: &ListQuery, columns: &[C]) -> Option<Condition> {
    let q = query.search()?;
    let condition = columns
        .iter()
        .fold(Condition::any(), |cond, col| cond.add(col.contains(q)));
    Some(condition)
}

/// Inclusive date range over a YYYY-MM-DD text column
pub fn date_range_condition<C: ColumnTrait>(query: &ListQuery, column: C) -> Condition {
    let mut cond = Condition::all();
    if let Some(start) = query.start_date() {
        cond = cond.add(column.gte(start));
    }
    if let Some(end) = query.end_date() {
        cond = cond.add(column.lte(end));
    }
    cond
}

/// `lines_json LIKE '%"<id>"%'`, used to count documents referencing a record
pub fn lines_reference<C: ColumnTrait>(column: C, id: &str) -> SimpleExpr {
    column.like(format!("%\"{}\"%", id))
}
