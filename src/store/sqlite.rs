//! Park storage on SQLite. Ids are stored as 16-byte blobs.

use super::{ParkStore, PARKS};
use crate::error::AppError;
use crate::model::Park;
use crate::sql::{delete, insert, select_all, select_by_id, update};
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteParkStore {
    pool: SqlitePool,
}

impl SqliteParkStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteParkStore { pool }
    }
}

#[async_trait]
impl ParkStore for SqliteParkStore {
    async fn list(&self) -> Result<Vec<Park>, AppError> {
        let sql = select_all(&PARKS);
        tracing::debug!(sql = %sql, "query");
        let parks = sqlx::query_as::<_, Park>(&sql).fetch_all(&self.pool).await?;
        Ok(parks)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Park>, AppError> {
        let sql = select_by_id(&PARKS);
        tracing::debug!(sql = %sql, %id, "query");
        let park = sqlx::query_as::<_, Park>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(park)
    }

    async fn save(&self, mut park: Park) -> Result<Park, AppError> {
        match park.id {
            None => {
                let id = Uuid::new_v4();
                let sql = insert(&PARKS);
                tracing::debug!(sql = %sql, %id, "query");
                sqlx::query(&sql)
                    .bind(id)
                    .bind(&park.name)
                    .bind(park.coordinates.latitude)
                    .bind(park.coordinates.longitude)
                    .execute(&self.pool)
                    .await?;
                park.id = Some(id);
            }
            Some(id) => {
                let sql = update(&PARKS);
                tracing::debug!(sql = %sql, %id, "query");
                let result = sqlx::query(&sql)
                    .bind(id)
                    .bind(&park.name)
                    .bind(park.coordinates.latitude)
                    .bind(park.coordinates.longitude)
                    .execute(&self.pool)
                    .await?;
                if result.rows_affected() == 0 {
                    return Err(AppError::Db(sqlx::Error::RowNotFound));
                }
            }
        }
        Ok(park)
    }

    async fn delete(&self, park: &Park) -> Result<bool, AppError> {
        let Some(id) = park.id else {
            return Ok(false);
        };
        let sql = delete(&PARKS);
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
