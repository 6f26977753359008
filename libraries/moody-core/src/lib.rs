//! Moody Player - Core Types
//!
//! Shared domain types for the Moody Player workspace: song records, their
//! identifiers, and the core error type. Everything else (storage, detection,
//! playback, HTTP) builds on this crate.

pub mod error;
pub mod types;

pub use error::{MoodyError, Result};
pub use types::{NewSong, Song, SongId};
