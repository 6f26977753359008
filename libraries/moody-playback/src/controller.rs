//! Player controller
//!
//! Owns the current song list, the active selection and the transport
//! state. All audio side effects go through the [`AudioOutput`] trait so
//! the controller itself stays platform-agnostic.

use crate::error::{PlaybackError, Result};
use crate::events::PlayerEvent;
use crate::output::AudioOutput;
use crate::types::{PlaybackState, PlayerConfig, QueueSong};
use crate::volume::Volume;

/// Platform-agnostic player controller
///
/// Selection semantics follow a single-deck player: selecting the active
/// song toggles play/pause and keeps the position; selecting a different
/// song loads it from the start. Events accumulate internally and are
/// collected with [`drain_events`](PlayerController::drain_events).
pub struct PlayerController<O: AudioOutput> {
    output: O,

    songs: Vec<QueueSong>,
    active_index: Option<usize>,
    state: PlaybackState,
    volume: Volume,

    pending_events: Vec<PlayerEvent>,
}

impl<O: AudioOutput> PlayerController<O> {
    /// Create a new controller with default configuration
    pub fn new(output: O) -> Self {
        Self::with_config(output, PlayerConfig::default())
    }

    /// Create a new controller with the given configuration
    pub fn with_config(mut output: O, config: PlayerConfig) -> Self {
        let volume = Volume::new(config.volume);
        output.set_gain(volume.gain());

        Self {
            output,
            songs: Vec::new(),
            active_index: None,
            state: PlaybackState::Idle,
            volume,
            pending_events: Vec::new(),
        }
    }

    /// Replace the song list
    ///
    /// An active index that no longer fits the new list resets the
    /// controller to idle and unloads the output. An active index that is
    /// still in bounds keeps playing untouched.
    pub fn set_songs(&mut self, songs: Vec<QueueSong>) {
        self.songs = songs;
        self.emit_song_list_changed();

        if let Some(index) = self.active_index {
            if index >= self.songs.len() {
                tracing::debug!(index, "Active song no longer in list, resetting");
                self.output.clear();
                self.active_index = None;
                self.set_state(PlaybackState::Idle);
            }
        }
    }

    /// Select a song by index
    ///
    /// Selecting the active song toggles play/pause and keeps the playback
    /// position. Selecting a different song loads it from the start and
    /// begins playing. A failed play attempt leaves the selection in place
    /// but paused, emits an error event, and does not raise to the caller,
    /// so the same index can simply be retried.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.songs.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        if self.active_index == Some(index) {
            return self.toggle();
        }

        let previous_song_id = self.active_song().map(|song| song.id.clone());
        let song = self.songs[index].clone();

        if let Err(e) = self.output.load(&song.audio_url) {
            tracing::warn!(song_id = %song.id, error = %e, "Failed to load song");
            self.emit_error(e.to_string());
            return Err(e);
        }

        self.active_index = Some(index);
        self.emit_song_changed(index, song.id.clone(), previous_song_id);
        self.try_play(&song.id);
        Ok(())
    }

    /// Toggle play/pause on the active song, keeping the position
    pub fn toggle(&mut self) -> Result<()> {
        let Some(index) = self.active_index else {
            return Err(PlaybackError::NoSongActive);
        };

        match self.state {
            PlaybackState::Playing => {
                self.output.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused | PlaybackState::Idle => {
                let song_id = self.songs[index].id.clone();
                self.try_play(&song_id);
            }
        }
        Ok(())
    }

    /// Handle the active song reaching its end
    pub fn handle_song_ended(&mut self) {
        if self.active_index.is_some() {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Handle an asynchronous error reported by the audio output
    ///
    /// The selection stays in place so the song can be retried.
    pub fn handle_song_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Audio output reported an error");
        self.emit_error(message);
        if self.state == PlaybackState::Playing {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Set the volume level (clamped to 0.0-1.0)
    ///
    /// A level above zero clears mute.
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.output.set_gain(self.volume.gain());
        self.emit_volume_changed();
    }

    /// Toggle mute, preserving the volume level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.output.set_gain(self.volume.gain());
        self.emit_volume_changed();
    }

    /// Current transport state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the active song, if any
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The active song, if any
    pub fn active_song(&self) -> Option<&QueueSong> {
        self.active_index.and_then(|index| self.songs.get(index))
    }

    /// Current song list
    pub fn songs(&self) -> &[QueueSong] {
        &self.songs
    }

    /// Current volume level (0.0-1.0)
    pub fn volume_level(&self) -> f32 {
        self.volume.level()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Consume the controller and return the audio output
    pub fn into_output(self) -> O {
        self.output
    }

    /// Collect all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether any events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // Failed play attempts settle on Paused instead of raising
    fn try_play(&mut self, song_id: &str) {
        match self.output.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => {
                tracing::warn!(song_id = %song_id, error = %e, "Failed to start playback");
                self.emit_error(e.to_string());
                self.set_state(PlaybackState::Paused);
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn emit_song_changed(
        &mut self,
        index: usize,
        song_id: String,
        previous_song_id: Option<String>,
    ) {
        self.pending_events.push(PlayerEvent::SongChanged {
            index,
            song_id,
            previous_song_id,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_song_list_changed(&mut self) {
        self.pending_events.push(PlayerEvent::SongListChanged {
            length: self.songs.len(),
        });
    }

    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlayerEvent::Error { message });
    }
}
