//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a pooled handle and `ImageStore` holds a path.

use sea_orm::DatabaseConnection;

use crate::service::image::ImageStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Filesystem store for uploaded car images.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, images: ImageStore) -> Self {
        Self { db, images }
    }
}
