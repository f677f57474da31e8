use sea_orm::DatabaseConnection;

/// Schema migrations compiled into the binary from `crates/backend/migrations`
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Runs pending migrations on the pool sea-orm already holds
pub async fn run_migrations(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let pool = conn.get_sqlite_connection_pool();
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, Statement};

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let conn = Database::connect(options).await.unwrap();

        run_migrations(&conn).await.unwrap();
        // running twice is a no-op
        run_migrations(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table'".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .filter_map(|r| r.try_get::<String>("", "name").ok())
            .collect();
        for table in [
            "a001_supplier",
            "a007_purchasing",
            "a011_stock_opname",
            "p900_stock_ledger",
            "p901_product_avg_cost",
            "temp_import",
            "system_log",
            "audit_log",
        ] {
            assert!(names.iter().any(|n| n == table), "missing {table}");
        }
    }
}
