use anyhow::Result;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

/// Weighted average purchase cost of a product
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "p901_product_avg_cost")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_ref: String,
    pub total_quantity: f64,
    pub total_value: f64,
    pub avg_cost: f64,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Rewrites the whole table: `(product_ref, total_quantity, total_value, avg_cost)`
pub async fn replace_all(rows: &[(String, f64, f64, f64)]) -> Result<()> {
    let txn = conn().begin().await?;
    Entity::delete_many().exec(&txn).await?;

    let now = Utc::now().to_rfc3339();
    for (product_ref, quantity, value, avg) in rows {
        ActiveModel {
            product_ref: Set(product_ref.clone()),
            total_quantity: Set(*quantity),
            total_value: Set(*value),
            avg_cost: Set(*avg),
            updated_at: Set(now.clone()),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(())
}

pub async fn list_all() -> Result<Vec<Model>> {
    Ok(Entity::find()
        .order_by_asc(Column::ProductRef)
        .all(conn())
        .await?)
}

pub async fn get(product_ref: &str) -> Result<Option<Model>> {
    Ok(Entity::find_by_id(product_ref.to_string()).one(conn()).await?)
}

/// product_ref → avg_cost
pub async fn avg_cost_map() -> Result<HashMap<String, f64>> {
    let rows = Entity::find().all(conn()).await?;
    Ok(rows.into_iter().map(|m| (m.product_ref, m.avg_cost)).collect())
}
