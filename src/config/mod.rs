//! Runtime configuration: listener address, database connection, log level.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
