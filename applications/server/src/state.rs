/// Shared application state
use crate::services::MediaStore;
use moody_storage::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub media_store: Arc<dyn MediaStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(pool: SqlitePool, media_store: Arc<dyn MediaStore>, max_upload_bytes: usize) -> Self {
        Self {
            pool,
            media_store,
            max_upload_bytes,
        }
    }
}
