//! Database handle: one pool, PostgreSQL or SQLite, chosen from config at startup.

use crate::config::{DatabaseConfig, PostgresConfig, SQLITE_IN_MEMORY};
use crate::error::AppError;
use crate::store::{ParkStore, PgParkStore, SqliteParkStore};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// SQL dialect of the connected engine. Only DDL differs between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

#[derive(Clone, Debug)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config {
            DatabaseConfig::Sqlite { path } => Self::connect_sqlite(path).await,
            DatabaseConfig::Postgres(pg) => Self::connect_postgres(pg).await,
        }
    }

    async fn connect_sqlite(path: &str) -> Result<Self, AppError> {
        let pool = if path == SQLITE_IN_MEMORY {
            // Every connection to :memory: is a separate database; keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            let opts = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await?
        };
        tracing::info!(path = %path, "connected to sqlite");
        Ok(Database::Sqlite(pool))
    }

    async fn connect_postgres(config: &PostgresConfig) -> Result<Self, AppError> {
        let opts = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(PgSslMode::Prefer);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opts)
            .await?;
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "connected to postgres"
        );
        Ok(Database::Postgres(pool))
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Database::Postgres(_) => Dialect::Postgres,
            Database::Sqlite(_) => Dialect::Sqlite,
        }
    }

    /// Run one statement without bind parameters (DDL). Returns rows affected.
    pub async fn execute(&self, sql: &str) -> Result<u64, AppError> {
        tracing::debug!(sql = %sql, "execute");
        let affected = match self {
            Database::Postgres(pool) => sqlx::query(sql).execute(pool).await?.rows_affected(),
            Database::Sqlite(pool) => sqlx::query(sql).execute(pool).await?.rows_affected(),
        };
        Ok(affected)
    }

    /// Round-trip a trivial query; used by the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Database::Postgres(pool) => {
                sqlx::query("SELECT 1").fetch_optional(pool).await?;
            }
            Database::Sqlite(pool) => {
                sqlx::query("SELECT 1").fetch_optional(pool).await?;
            }
        }
        Ok(())
    }

    /// Persistence gateway for parks bound to this pool.
    pub fn parks(&self) -> Arc<dyn ParkStore> {
        match self {
            Database::Postgres(pool) => Arc::new(PgParkStore::new(pool.clone())),
            Database::Sqlite(pool) => Arc::new(SqliteParkStore::new(pool.clone())),
        }
    }

    pub async fn close(&self) {
        match self {
            Database::Postgres(pool) => pool.close().await,
            Database::Sqlite(pool) => pool.close().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_sqlite_survives_across_statements() {
        let db = Database::connect(&DatabaseConfig::sqlite_in_memory()).await.unwrap();
        assert_eq!(db.dialect(), Dialect::Sqlite);
        db.execute("CREATE TABLE t (x INTEGER)").await.unwrap();
        assert_eq!(db.execute("INSERT INTO t (x) VALUES (1)").await.unwrap(), 1);
        db.ping().await.unwrap();
    }
}
