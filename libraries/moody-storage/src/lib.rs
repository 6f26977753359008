//! Moody Player Storage
//!
//! SQLite catalog store for Moody Player. Persists song records (metadata
//! plus the media-store URL of the audio binary) and answers mood-filtered
//! queries.
//!
//! # Example
//!
//! ```rust,no_run
//! use moody_storage::{create_pool, run_migrations, songs};
//! use moody_core::NewSong;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://moody.db").await?;
//! run_migrations(&pool).await?;
//!
//! let song = songs::create(
//!     &pool,
//!     NewSong {
//!         title: "Song".into(),
//!         artist: "Artist".into(),
//!         mood: "happy".into(),
//!         audio_url: "https://cdn/song.mp3".into(),
//!     },
//! )
//! .await?;
//!
//! let happy = songs::get_by_mood(&pool, "happy").await?;
//! assert_eq!(happy[0].id, song.id);
//! # Ok(())
//! # }
//! ```

mod database;
mod error;

pub mod songs;

pub use database::{create_pool, run_migrations};
pub use error::{Result, StorageError};

// Re-export the pool type so consumers don't need a direct sqlx dependency
pub use sqlx::SqlitePool;
