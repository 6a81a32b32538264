//! Park resource routes, nested under `PARKS_PREFIX` by the application.

use crate::handlers::parks::{create, delete as delete_handler, list, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const PARKS_PREFIX: &str = "/api/v1/parks";

pub fn park_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(show).put(update).delete(delete_handler))
        .with_state(state)
}
