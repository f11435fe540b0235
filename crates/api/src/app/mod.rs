//! HTTP API application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request payloads and payload→domain mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use shelf_registry::ItemRegistry;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around a fresh, empty registry (the public
/// entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_registry(ItemRegistry::arc())
}

/// Build the router around an existing registry.
///
/// Lets the caller own the store and inspect it outside the HTTP surface.
pub fn build_app_with_registry(registry: Arc<ItemRegistry>) -> Router {
    routes::router().layer(Extension(registry))
}
