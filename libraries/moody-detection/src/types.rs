//! Core types for mood detection

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single captured camera frame
///
/// Interleaved RGB, 8 bits per channel. The sampler never inspects pixel
/// data itself; frames are passed straight to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Interleaved RGB pixel data, `width * height * 3` bytes
    pub data: Vec<u8>,
}

impl VideoFrame {
    /// Create a frame from raw RGB data
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// Configuration for the mood sampler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Interval between detection ticks (default: 1.5s)
    ///
    /// A tuning knob, not a correctness constraint. Lower values raise CPU
    /// usage and catalog query volume.
    pub interval: Duration,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1500),
        }
    }
}
