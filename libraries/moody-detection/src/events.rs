//! Detection events
//!
//! Event-based communication toward the embedding application. The sampler
//! debounces on mood change: two consecutive ticks that resolve to the same
//! dominant label produce a single event.

use serde::{Deserialize, Serialize};

/// Events emitted by the mood sampler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodEvent {
    /// The dominant detected mood differs from the previously emitted one
    MoodChanged {
        /// The new mood label
        mood: String,
    },
}
