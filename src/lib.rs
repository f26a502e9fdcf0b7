pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::Router;

pub use service::NoteService;

/// Builds the REST application around the given service.
pub fn app(service: NoteService) -> Router {
    handlers::rest::router(Arc::new(service))
}
