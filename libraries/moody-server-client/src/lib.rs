//! Moody Player Catalog Client
//!
//! HTTP client library for the Moody Player backend API.
//!
//! # Features
//!
//! - **Queries**: Fetch songs, optionally filtered by mood
//! - **Upload**: Upload an audio file with its title, artist and mood
//! - **Mood feed**: Latest-wins song list driven by mood changes
//!
//! # Example
//!
//! ```ignore
//! use moody_server_client::{CatalogClient, MoodFeed, SongMetadata};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(CatalogClient::new("https://moody.example.com")?);
//!
//!     // Upload a song
//!     let metadata = SongMetadata {
//!         title: "My Song".to_string(),
//!         artist: "Artist".to_string(),
//!         mood: "happy".to_string(),
//!     };
//!     let response = client
//!         .upload()
//!         .upload_song("song.mp3".as_ref(), &metadata)
//!         .await?;
//!     println!("Uploaded {}", response.song.id);
//!
//!     // Keep a feed fresh as the detected mood changes
//!     let feed = MoodFeed::new(client);
//!     feed.refresh("happy").await?;
//!     println!("Feed has {} songs", feed.songs().await.len());
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod error;
mod feed;
mod types;
mod upload;

// Re-export main types
pub use catalog::CatalogClient;
pub use error::{CatalogClientError, Result};
pub use feed::MoodFeed;
pub use types::{SongMetadata, SongsResponse, UploadResponse};
pub use upload::UploadClient;
