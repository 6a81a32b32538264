//! Schema migrations run once at startup, before the listener accepts connections.
//! Applied migrations are logged in `_migrations`, so rerunning is a no-op.

use crate::db::{Database, Dialect};
use crate::error::AppError;
use crate::model::PARKS_TABLE;
use crate::sql::quoted;
use async_trait::async_trait;
use std::collections::HashMap;

const MIGRATIONS_TABLE: &str = "_migrations";

#[async_trait]
pub trait Migration: Send + Sync {
    /// Unique key in the migration log.
    fn name(&self) -> &'static str;

    async fn prepare(&self, db: &Database) -> Result<(), AppError>;

    async fn revert(&self, db: &Database) -> Result<(), AppError>;
}

/// Creates `parks` with a unique `name` and the two flattened coordinate columns.
pub struct CreateParkTable;

impl CreateParkTable {
    pub fn create_sql(dialect: Dialect) -> String {
        let (id_type, float_type) = match dialect {
            Dialect::Postgres => ("UUID", "DOUBLE PRECISION"),
            Dialect::Sqlite => ("BLOB", "REAL"),
        };
        format!(
            "CREATE TABLE IF NOT EXISTS {table} (\n  \
             \"id\" {id_type} PRIMARY KEY,\n  \
             \"name\" TEXT NOT NULL,\n  \
             \"coordinates_latitude\" {float_type} NOT NULL,\n  \
             \"coordinates_longitude\" {float_type} NOT NULL,\n  \
             CONSTRAINT {unique} UNIQUE (\"name\")\n)",
            table = quoted(PARKS_TABLE),
            unique = quoted("uq:parks.name"),
        )
    }

    pub fn drop_sql() -> String {
        format!("DROP TABLE IF EXISTS {}", quoted(PARKS_TABLE))
    }
}

#[async_trait]
impl Migration for CreateParkTable {
    fn name(&self) -> &'static str {
        "CreateParkTable"
    }

    async fn prepare(&self, db: &Database) -> Result<(), AppError> {
        db.execute(&Self::create_sql(db.dialect())).await?;
        Ok(())
    }

    async fn revert(&self, db: &Database) -> Result<(), AppError> {
        db.execute(&Self::drop_sql()).await?;
        Ok(())
    }
}

/// Ordered list of registered migrations.
#[derive(Default)]
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Migrator with every migration this service ships.
    pub fn with_defaults() -> Self {
        let mut migrator = Self::new();
        migrator.add(CreateParkTable);
        migrator
    }

    pub fn add(&mut self, migration: impl Migration + 'static) -> &mut Self {
        self.migrations.push(Box::new(migration));
        self
    }

    /// Apply every migration not yet logged, as one new batch. Returns how many ran.
    pub async fn migrate(&self, db: &Database) -> Result<usize, AppError> {
        ensure_log_table(db).await?;
        let applied = applied_batches(db).await?;
        let batch = applied.values().copied().max().unwrap_or(0) + 1;

        let mut count = 0;
        for migration in &self.migrations {
            if applied.contains_key(migration.name()) {
                continue;
            }
            tracing::info!(migration = migration.name(), batch, "preparing migration");
            migration.prepare(db).await?;
            record(db, migration.name(), batch).await?;
            count += 1;
        }
        if count == 0 {
            tracing::debug!("no pending migrations");
        }
        Ok(count)
    }

    /// Revert the newest batch in reverse registration order. Returns how many were reverted.
    pub async fn revert_last_batch(&self, db: &Database) -> Result<usize, AppError> {
        ensure_log_table(db).await?;
        let applied = applied_batches(db).await?;
        let Some(last) = applied.values().copied().max() else {
            return Ok(0);
        };

        let mut count = 0;
        for migration in self.migrations.iter().rev() {
            if applied.get(migration.name()) != Some(&last) {
                continue;
            }
            tracing::info!(migration = migration.name(), batch = last, "reverting migration");
            migration.revert(db).await?;
            forget(db, migration.name()).await?;
            count += 1;
        }
        Ok(count)
    }
}

async fn ensure_log_table(db: &Database) -> Result<(), AppError> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  \
         \"name\" TEXT PRIMARY KEY,\n  \
         \"batch\" BIGINT NOT NULL,\n  \
         \"applied_at\" TEXT NOT NULL\n)",
        quoted(MIGRATIONS_TABLE)
    );
    db.execute(&sql).await?;
    Ok(())
}

async fn applied_batches(db: &Database) -> Result<HashMap<String, i64>, AppError> {
    let sql = format!("SELECT \"name\", \"batch\" FROM {}", quoted(MIGRATIONS_TABLE));
    let rows: Vec<(String, i64)> = match db {
        Database::Postgres(pool) => sqlx::query_as(&sql).fetch_all(pool).await?,
        Database::Sqlite(pool) => sqlx::query_as(&sql).fetch_all(pool).await?,
    };
    Ok(rows.into_iter().collect())
}

async fn record(db: &Database, name: &str, batch: i64) -> Result<(), AppError> {
    let sql = format!(
        "INSERT INTO {} (\"name\", \"batch\", \"applied_at\") VALUES ($1, $2, $3)",
        quoted(MIGRATIONS_TABLE)
    );
    let applied_at = chrono::Utc::now().to_rfc3339();
    match db {
        Database::Postgres(pool) => {
            sqlx::query(&sql).bind(name).bind(batch).bind(&applied_at).execute(pool).await?;
        }
        Database::Sqlite(pool) => {
            sqlx::query(&sql).bind(name).bind(batch).bind(&applied_at).execute(pool).await?;
        }
    }
    Ok(())
}

async fn forget(db: &Database, name: &str) -> Result<(), AppError> {
    let sql = format!("DELETE FROM {} WHERE \"name\" = $1", quoted(MIGRATIONS_TABLE));
    match db {
        Database::Postgres(pool) => {
            sqlx::query(&sql).bind(name).execute(pool).await?;
        }
        Database::Sqlite(pool) => {
            sqlx::query(&sql).bind(name).execute(pool).await?;
        }
    }
    Ok(())
}
