//! Moody Server Library
//!
//! Backend for Moody Player: accepts song uploads (audio to an external
//! media store, metadata to SQLite) and answers mood-filtered song queries.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{media_store::HttpMediaStore, MediaStore};
pub use state::AppState;
