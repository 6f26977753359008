//! Platform-agnostic facial expression classifier trait

use crate::types::VideoFrame;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Classifier errors
///
/// Inference errors are per-tick and swallowed by the detection loop; a
/// failure on one frame never stops subsequent ticks.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The model bundle has not been loaded yet
    #[error("Classifier model not loaded")]
    NotLoaded,

    /// Inference failed on this frame
    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Expression confidence scores for one detected face
///
/// Maps expression labels (open set, e.g. "happy", "sad", "neutral") to
/// confidence in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionScores {
    scores: HashMap<String, f32>,
}

impl ExpressionScores {
    /// Build from an iterator of (label, confidence) pairs
    pub fn from_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        Self {
            scores: scores.into_iter().map(|(l, s)| (l.into(), s)).collect(),
        }
    }

    /// Confidence for a single label, if present
    pub fn get(&self, label: &str) -> Option<f32> {
        self.scores.get(label).copied()
    }

    /// The dominant expression: highest strictly-positive confidence
    ///
    /// Deterministic: ties are broken toward the lexicographically smallest
    /// label, never toward map iteration order. Returns `None` when the map
    /// is empty or no score is above zero.
    pub fn dominant(&self) -> Option<(&str, f32)> {
        let mut best: Option<(&str, f32)> = None;

        for (label, &score) in &self.scores {
            if score <= 0.0 {
                continue;
            }
            match best {
                None => best = Some((label, score)),
                Some((best_label, best_score)) => {
                    if score > best_score || (score == best_score && label.as_str() < best_label) {
                        best = Some((label, score));
                    }
                }
            }
        }

        best
    }
}

/// Platform-agnostic facial expression classifier
///
/// Implementors wrap a model runtime loaded from a model bundle. One
/// inference is issued per detection tick; inference is asynchronous and may
/// outlive the tick interval.
#[async_trait]
pub trait ExpressionClassifier: Send + Sync {
    /// Whether the model bundle has finished loading
    ///
    /// Detection cannot start before this returns true.
    fn is_loaded(&self) -> bool;

    /// Classify all faces in a frame
    ///
    /// Returns one score map per detected face, empty when no face is
    /// visible. Face order is implementation-defined; the sampler uses the
    /// first entry.
    async fn classify(&self, frame: &VideoFrame) -> Result<Vec<ExpressionScores>, ClassifierError>;
}
