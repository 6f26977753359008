//! Volume state with mute handling
//!
//! Volume is a linear gain in the 0.0-1.0 range, matching what streaming
//! audio elements accept directly. Mute is tracked separately so the level
//! survives a mute/unmute cycle.

/// Volume state
///
/// Raising the level above zero clears mute; muting at any level keeps the
/// level intact for unmute.
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create a new volume state, clamping the level to 0.0-1.0
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Set volume level (clamped to 0.0-1.0)
    ///
    /// A level above zero clears mute; zero leaves mute untouched.
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
        if self.level > 0.0 {
            self.muted = false;
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective gain to hand to the audio output
    ///
    /// Returns 0.0 while muted, otherwise the level
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
