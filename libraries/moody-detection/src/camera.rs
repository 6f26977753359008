//! Platform-agnostic camera trait
//!
//! Abstracts media capture for different platforms. The sampler owns exactly
//! one camera and is the only caller of these methods.

use crate::types::VideoFrame;
use thiserror::Error;

/// Camera acquisition and capture errors
///
/// The four acquisition kinds each map to a distinct user-facing message;
/// capture errors are per-frame and swallowed by the detection loop.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The platform has no media-capture support at all
    #[error("Camera API not supported on this platform")]
    Unsupported,

    /// The user (or OS policy) denied camera access
    #[error("Camera permission denied")]
    PermissionDenied,

    /// No camera device is connected
    #[error("No camera device found")]
    NotFound,

    /// The device exists but is held by another application
    #[error("Camera is in use by another application")]
    Busy,

    /// A frame could not be captured
    #[error("Frame capture failed: {0}")]
    Capture(String),
}

impl CameraError {
    /// Human-readable message suitable for direct display
    pub fn user_message(&self) -> &'static str {
        match self {
            CameraError::Unsupported => {
                "Camera API not supported in this environment. Try a different device."
            }
            CameraError::PermissionDenied => {
                "Permission denied. Allow camera access for this application and retry."
            }
            CameraError::NotFound => "No camera found. Connect a webcam and try again.",
            CameraError::Busy => "Camera is in use by another app. Close it and try again.",
            CameraError::Capture(_) => {
                "Could not access the camera. Check permissions and OS privacy settings."
            }
        }
    }
}

/// Platform-agnostic camera
///
/// Implementors own the underlying media stream. `release` must be safe to
/// call at any time, including before `acquire` and repeatedly.
pub trait Camera: Send {
    /// Request camera access and open the stream
    ///
    /// May suspend behind a user-gesture-gated permission prompt on
    /// platforms that have one; implementors surface the outcome as one of
    /// the [`CameraError`] acquisition kinds.
    fn acquire(&mut self) -> Result<(), CameraError>;

    /// Release the stream and all acquired tracks. Idempotent.
    fn release(&mut self);

    /// Capture the current frame
    fn capture_frame(&mut self) -> Result<VideoFrame, CameraError>;
}
