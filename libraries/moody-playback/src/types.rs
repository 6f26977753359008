//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Song information for the active playlist
///
/// Contains all metadata needed for playback and display. This is a
/// detached snapshot of catalog data; the controller never reaches back
/// into storage or the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSong {
    /// Unique song identifier from the catalog
    pub id: String,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Mood label this song is tagged with
    pub mood: String,

    /// Streamable audio URL
    pub audio_url: String,
}

/// Playback transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No song active
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-song, position retained
    Paused,
}

/// Configuration for the player controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn queue_song_creation() {
        let song = QueueSong {
            id: "song1".to_string(),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            mood: "happy".to_string(),
            audio_url: "https://cdn.example.com/song1.mp3".to_string(),
        };

        assert_eq!(song.id, "song1");
        assert_eq!(song.mood, "happy");
    }
}
