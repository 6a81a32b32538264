//! Shared application state for all routes. Nothing here is mutated after startup.

use crate::db::Database;
use crate::store::ParkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub parks: Arc<dyn ParkStore>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let parks = db.parks();
        AppState { db, parks }
    }
}
