//! HTTP handlers for the park resource.

pub mod parks;
pub use parks::*;
