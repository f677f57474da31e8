use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub(crate) fn build_sqlite_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    // Windows drive letters need a leading slash in the URL
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Opens the SQLite file, creating it and its directory when missing,
/// and applies the embedded migrations.
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Connecting to database: {}", db_url);

    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;

    super::migration_runner::run_migrations(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

/// Panics when called before `initialize_database`; main initializes it before serving.
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection is not initialized")
}

/// Database of the service tests: a temp file with the migrations applied,
/// opened once per test binary. Hold the guard for the whole test; average
/// costs are recomputed table-wide, so tests must not interleave.
#[cfg(test)]
pub(crate) async fn test_database() -> tokio::sync::MutexGuard<'static, ()> {
    static LOCK: once_cell::sync::Lazy<tokio::sync::Mutex<()>> =
        once_cell::sync::Lazy::new(|| tokio::sync::Mutex::new(()));

    let guard = LOCK.lock().await;
    if DB_CONN.get().is_none() {
        let path = std::env::temp_dir().join(format!("dyeworks-test-{}.db", uuid::Uuid::new_v4()));
        initialize_database(&path)
            .await
            .expect("test database should open");
    }
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_unix_path() {
        assert_eq!(
            build_sqlite_url(Path::new("/tmp/db/app.db")),
            "sqlite:///tmp/db/app.db?mode=rwc"
        );
    }

    #[test]
    fn test_sqlite_url_windows_path() {
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }
}
