//! Wire types for the Moody Player catalog API.

use moody_core::Song;
use serde::{Deserialize, Serialize};

/// Metadata sent alongside an audio file upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongMetadata {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Mood label to tag the song with
    pub mood: String,
}

/// Response from `GET /songs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongsResponse {
    /// Human-readable status message
    pub message: String,

    /// Songs matching the query
    pub songs: Vec<Song>,
}

/// Response from `POST /songs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable status message
    pub message: String,

    /// The stored song, including its id and streamable URL
    pub song: Song,
}
