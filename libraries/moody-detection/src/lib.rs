//! Moody Player - Mood Detection
//!
//! Platform-agnostic mood sampling for Moody Player.
//!
//! This crate provides:
//! - Camera lifecycle management (acquire/release, typed acquisition errors)
//! - A fixed-interval detection loop over a facial expression classifier
//! - Deterministic dominant-expression reduction
//! - Change-debounced mood events (an event fires only when the detected
//!   mood differs from the previously emitted one)
//!
//! # Architecture
//!
//! `moody-detection` is completely platform-agnostic: camera access and
//! classifier inference are provided via the [`Camera`] and
//! [`ExpressionClassifier`] traits. The embedding platform (browser bridge,
//! desktop capture stack, test harness) implements both; the sampler only
//! owns the session state and the timing/debounce policy.
//!
//! # Example
//!
//! ```rust,no_run
//! use moody_detection::{DetectionConfig, MoodEvent, MoodSampler};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(camera: impl moody_detection::Camera + 'static,
//! #                  classifier: impl moody_detection::ExpressionClassifier + 'static)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let (mut sampler, mut events) =
//!     MoodSampler::new(camera, classifier, DetectionConfig::default());
//!
//! sampler.start_camera()?;
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(sampler.run(shutdown.clone()));
//!
//! while let Some(MoodEvent::MoodChanged { mood }) = events.recv().await {
//!     println!("mood is now {mood}");
//! }
//! # Ok(())
//! # }
//! ```

mod camera;
mod classifier;
mod error;
mod events;
mod sampler;
pub mod types;

pub use camera::{Camera, CameraError};
pub use classifier::{ClassifierError, ExpressionClassifier, ExpressionScores};
pub use error::{DetectionError, Result};
pub use events::MoodEvent;
pub use sampler::MoodSampler;
pub use types::{DetectionConfig, VideoFrame};
