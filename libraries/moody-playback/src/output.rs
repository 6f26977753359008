//! Platform-agnostic audio output trait
//!
//! Abstracts the actual audio element or sink for different platforms

use crate::error::Result;

/// Platform-agnostic audio output
///
/// Implementors wrap whatever plays a streamable URL on their platform.
/// This trait lets `PlayerController` drive playback without depending on
/// any audio backend.
pub trait AudioOutput: Send {
    /// Load a new song by URL, resetting the position to the start
    ///
    /// Replaces whatever was loaded before. Does not start playback.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback from the current position
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    fn pause(&mut self);

    /// Set the output gain (0.0-1.0; 0.0 is silence)
    fn set_gain(&mut self, gain: f32);

    /// Unload the current song and release the output
    fn clear(&mut self);
}

/// Dummy audio output for testing
///
/// Accepts every command and remembers the loaded URL
#[cfg(test)]
pub struct DummyOutput {
    loaded_url: Option<String>,
    playing: bool,
    gain: f32,
}

#[cfg(test)]
impl DummyOutput {
    /// Create a new dummy output
    pub fn new() -> Self {
        Self {
            loaded_url: None,
            playing: false,
            gain: 1.0,
        }
    }
}

#[cfg(test)]
impl AudioOutput for DummyOutput {
    fn load(&mut self, url: &str) -> Result<()> {
        self.loaded_url = Some(url.to_string());
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.loaded_url.is_none() {
            return Err(crate::error::PlaybackError::NoSongActive);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn clear(&mut self) {
        self.loaded_url = None;
        self.playing = false;
    }
}
