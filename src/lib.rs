//! Bookshelf server
//!
//! A small REST JSON API for keeping track of books: what is on the shelf,
//! how far each one has been read, and which are finished.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state with an empty in-memory store and random ids
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::in_memory();
        let services = services::Services::new(repository, Arc::new(services::UuidGenerator));

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
