//! Persistence gateway for parks. Storage errors propagate unchanged.

mod postgres;
mod sqlite;

pub use postgres::PgParkStore;
pub use sqlite::SqliteParkStore;

use crate::error::AppError;
use crate::model::{Park, PARKS_TABLE};
use crate::sql::TableSpec;
use async_trait::async_trait;
use uuid::Uuid;

/// Flat row layout of a park; coordinates are split into two columns.
pub const PARKS: TableSpec = TableSpec {
    name: PARKS_TABLE,
    pk: "id",
    columns: &["name", "coordinates_latitude", "coordinates_longitude"],
};

#[async_trait]
pub trait ParkStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Park>, AppError>;

    async fn find(&self, id: Uuid) -> Result<Option<Park>, AppError>;

    /// Insert when `park.id` is `None` (a new id is assigned), otherwise update that row.
    /// Updating an id with no row yields `sqlx::Error::RowNotFound`.
    async fn save(&self, park: Park) -> Result<Park, AppError>;

    /// Returns false if the park was never saved or its row is already gone.
    async fn delete(&self, park: &Park) -> Result<bool, AppError>;
}
