//! Router construction: common routes and the park resource.

pub mod common;
pub mod parks;

pub use common::common_routes;
pub use parks::{park_routes, PARKS_PREFIX};
