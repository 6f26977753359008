//! Moody Player - Playback Control
//!
//! Platform-agnostic playback control for Moody Player.
//!
//! This crate provides:
//! - A single-deck player over a mood-filtered song list
//! - Toggle/switch selection semantics (same index toggles play/pause,
//!   a different index loads from the start)
//! - Volume control (linear 0.0-1.0, mute/unmute with level retention)
//! - Event emission for UI synchronization
//!
//! # Architecture
//!
//! `moody-playback` is completely platform-agnostic: no audio backend, no
//! UI framework, no network. The actual audio element or sink is provided
//! via the [`AudioOutput`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use moody_playback::{AudioOutput, PlayerController, QueueSong, Result};
//!
//! struct MyAudioElement { /* platform audio handle */ }
//!
//! impl AudioOutput for MyAudioElement {
//!     fn load(&mut self, url: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_gain(&mut self, gain: f32) {}
//!     fn clear(&mut self) {}
//! }
//!
//! let mut player = PlayerController::new(MyAudioElement { });
//!
//! player.set_songs(vec![QueueSong {
//!     id: "song1".to_string(),
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     mood: "happy".to_string(),
//!     audio_url: "https://cdn.example.com/song1.mp3".to_string(),
//! }]);
//!
//! player.select(0).ok();      // starts playing
//! player.select(0).ok();      // same index: pauses, position kept
//! player.set_volume(0.5);
//!
//! for event in player.drain_events() {
//!     // forward to the UI
//! }
//! ```

mod controller;
mod error;
mod events;
mod output;
pub mod types;
mod volume;

// Public exports
pub use controller::PlayerController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use output::AudioOutput;
pub use types::{PlaybackState, PlayerConfig, QueueSong};
pub use volume::Volume;
