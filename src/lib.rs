//! Parks of Prague: REST backend for parks and their coordinates, on PostgreSQL or SQLite.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod model;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use app::{build_application, build_router, build_state, Application};
pub use config::{AppConfig, DatabaseConfig, PostgresConfig, ServerConfig};
pub use db::{Database, Dialect};
pub use error::{AppError, ConfigError};
pub use migration::{CreateParkTable, Migration, Migrator};
pub use model::{Coordinates, Park};
pub use state::AppState;
pub use store::ParkStore;
