//! Error types for mood detection

use crate::camera::CameraError;
use crate::classifier::ClassifierError;
use thiserror::Error;

/// Detection errors
#[derive(Debug, Error)]
pub enum DetectionError {
    /// Camera acquisition or capture error
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// Classifier error
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Result type for detection operations
pub type Result<T> = std::result::Result<T, DetectionError>;
