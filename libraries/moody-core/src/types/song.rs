/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted song record
///
/// `mood` is an open-set label used as an exact-match filter key (case
/// sensitive, no normalization). `audio_url` points at exactly one immutable
/// binary object in the media store and is never empty for a persisted song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier, assigned by the catalog store on creation
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Mood label the song is tagged with
    pub mood: String,

    /// Resolvable URL to the audio binary
    pub audio_url: String,

    /// When the song was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song record with a generated id and current timestamp
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        mood: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artist: artist.into(),
            mood: mood.into(),
            audio_url: audio_url.into(),
            created_at: Utc::now(),
        }
    }
}

/// Metadata for a song about to be persisted
///
/// The catalog store assigns the id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub mood: String,
    pub audio_url: String,
}
