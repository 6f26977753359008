//! Player events
//!
//! Event-based communication for UI synchronization. Events accumulate in
//! the controller and are collected with `drain_events` after each batch of
//! commands.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed (idle, playing, paused)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different song became active
    SongChanged {
        /// Index of the new song in the current list
        index: usize,
        /// ID of the new song
        song_id: String,
        /// ID of the previously active song (if any)
        previous_song_id: Option<String>,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// The song list was replaced
    SongListChanged {
        /// New list length
        length: usize,
    },

    /// Error surfaced by the audio output
    Error {
        /// Error message
        message: String,
    },
}
