//! Mood sampler - core orchestration
//!
//! Owns the camera lifecycle, the ephemeral detection session and the
//! fixed-interval tick loop. Reduces classifier output to a single dominant
//! label per tick and emits a [`MoodEvent::MoodChanged`] only when that
//! label differs from the previously emitted one.

use crate::{
    camera::{Camera, CameraError},
    classifier::ExpressionClassifier,
    events::MoodEvent,
    types::DetectionConfig,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Mood sampler over a camera and an expression classifier
///
/// Session state (camera active, detection active, last emitted mood) lives
/// as plain fields of this value; there are no module-level globals. The
/// camera is released on [`stop_camera`](MoodSampler::stop_camera), when the
/// [`run`](MoodSampler::run) loop exits, or at the latest on drop.
pub struct MoodSampler<C: Camera, E> {
    camera: C,
    classifier: E,
    config: DetectionConfig,

    // Ephemeral detection session
    camera_active: bool,
    detection_active: bool,
    last_mood: Option<String>,

    events: UnboundedSender<MoodEvent>,
}

impl<C, E> MoodSampler<C, E>
where
    C: Camera,
    E: ExpressionClassifier,
{
    /// Create a new sampler and the receiving end of its event channel
    pub fn new(
        camera: C,
        classifier: E,
        config: DetectionConfig,
    ) -> (Self, UnboundedReceiver<MoodEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();

        (
            Self {
                camera,
                classifier,
                config,
                camera_active: false,
                detection_active: false,
                last_mood: None,
                events,
            },
            receiver,
        )
    }

    /// Request camera access and start the stream
    ///
    /// On success the detection session becomes camera-active and the last
    /// emitted mood resets, so the next tick with a detected face emits
    /// unconditionally.
    pub fn start_camera(&mut self) -> Result<(), CameraError> {
        self.camera.acquire()?;
        self.camera_active = true;
        self.last_mood = None;
        tracing::debug!("Camera started");
        Ok(())
    }

    /// Release camera resources and cancel detection. Idempotent.
    pub fn stop_camera(&mut self) {
        self.camera.release();
        self.camera_active = false;
        self.detection_active = false;
        tracing::debug!("Camera stopped");
    }

    /// Begin scheduling detection ticks
    ///
    /// No-op unless the camera is active, detection is not already running
    /// and the classifier reports its model as loaded. Returns whether
    /// detection is now active.
    pub fn start_detection(&mut self) -> bool {
        if self.detection_active || !self.camera_active || !self.classifier.is_loaded() {
            return self.detection_active;
        }
        self.detection_active = true;
        tracing::debug!("Detection started");
        true
    }

    /// Stop scheduling detection ticks. Idempotent.
    ///
    /// Does not cancel an inference already in flight.
    pub fn stop_detection(&mut self) {
        self.detection_active = false;
    }

    /// Whether the camera stream is currently open
    pub fn camera_active(&self) -> bool {
        self.camera_active
    }

    /// Whether detection ticks are being scheduled
    pub fn detection_active(&self) -> bool {
        self.detection_active
    }

    /// The last mood label that triggered an event, if any
    pub fn last_mood(&self) -> Option<&str> {
        self.last_mood.as_deref()
    }

    /// Run one detection tick
    ///
    /// Capture the current frame, classify it, reduce the first face's
    /// scores to the dominant label and emit a mood-changed event when the
    /// label differs from the previous emission. Zero detected faces skip
    /// the tick without touching session state. Capture and inference
    /// errors are logged and swallowed; one failed tick never stops
    /// subsequent ticks.
    pub async fn tick(&mut self) {
        if !self.detection_active {
            return;
        }

        let frame = match self.camera.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!(error = %e, "Frame capture failed, skipping tick");
                return;
            }
        };

        let faces = match self.classifier.classify(&frame).await {
            Ok(faces) => faces,
            Err(e) => {
                tracing::debug!(error = %e, "Inference failed, skipping tick");
                return;
            }
        };

        // No face in frame: nothing to do
        let Some(face) = faces.first() else {
            return;
        };

        let Some((label, confidence)) = face.dominant() else {
            return;
        };

        if self.last_mood.as_deref() == Some(label) {
            return;
        }

        let mood = label.to_string();
        tracing::info!(mood = %mood, confidence, "Mood changed");
        self.last_mood = Some(mood.clone());
        let _ = self.events.send(MoodEvent::MoodChanged { mood });
    }

    /// Drive the detection loop until cancelled
    ///
    /// Starts detection, then ticks on a fixed wall-clock interval. Ticks
    /// are not chained to inference completion; a slow inference delays the
    /// next capture rather than overlapping it. On cancellation the loop
    /// stops scheduling (in-flight work is left to finish) and the camera
    /// is released.
    pub async fn run(mut self, shutdown: CancellationToken) {
        if !self.start_detection() {
            tracing::warn!("Detection loop not started: camera inactive or model not loaded");
            return;
        }

        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = interval.tick() => self.tick().await,
            }
        }

        self.stop_detection();
        self.stop_camera();
    }
}

impl<C: Camera, E> Drop for MoodSampler<C, E> {
    fn drop(&mut self) {
        // Teardown guarantee: no dangling hardware acquisition even when
        // stop_camera was never called.
        if self.camera_active {
            self.camera.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierError, ExpressionScores};
    use crate::types::VideoFrame;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct TestCamera {
        acquire_error: Option<CameraError>,
        fail_capture: bool,
        releases: Arc<AtomicUsize>,
    }

    impl TestCamera {
        fn working() -> Self {
            Self {
                acquire_error: None,
                fail_capture: false,
                releases: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing_with(error: CameraError) -> Self {
            Self {
                acquire_error: Some(error),
                fail_capture: false,
                releases: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Camera for TestCamera {
        fn acquire(&mut self) -> Result<(), CameraError> {
            match self.acquire_error.take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }

        fn capture_frame(&mut self) -> Result<VideoFrame, CameraError> {
            if self.fail_capture {
                Err(CameraError::Capture("device glitch".to_string()))
            } else {
                Ok(VideoFrame::new(2, 2, vec![0; 12]))
            }
        }
    }

    type TickResult = Result<Vec<ExpressionScores>, ClassifierError>;

    /// Classifier that replays a scripted sequence of per-tick results
    struct ScriptedClassifier {
        loaded: bool,
        script: Mutex<VecDeque<TickResult>>,
    }

    impl ScriptedClassifier {
        fn new(ticks: Vec<TickResult>) -> Self {
            Self {
                loaded: true,
                script: Mutex::new(ticks.into()),
            }
        }

        fn not_loaded() -> Self {
            Self {
                loaded: false,
                script: Mutex::new(VecDeque::new()),
            }
        }
    }

    #[async_trait]
    impl ExpressionClassifier for ScriptedClassifier {
        fn is_loaded(&self) -> bool {
            self.loaded
        }

        async fn classify(&self, _frame: &VideoFrame) -> TickResult {
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    fn face(scores: &[(&str, f32)]) -> Vec<ExpressionScores> {
        vec![ExpressionScores::from_scores(
            scores.iter().map(|(l, s)| (l.to_string(), *s)),
        )]
    }

    fn sampler_with(
        classifier: ScriptedClassifier,
    ) -> (
        MoodSampler<TestCamera, ScriptedClassifier>,
        UnboundedReceiver<MoodEvent>,
    ) {
        MoodSampler::new(TestCamera::working(), classifier, DetectionConfig::default())
    }

    fn drain(receiver: &mut UnboundedReceiver<MoodEvent>) -> Vec<MoodEvent> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn consecutive_identical_moods_emit_once() {
        let classifier = ScriptedClassifier::new(vec![
            Ok(face(&[("happy", 0.9)])),
            Ok(face(&[("happy", 0.8)])),
            Ok(face(&[("happy", 0.95)])),
        ]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        assert!(sampler.start_detection());

        sampler.tick().await;
        sampler.tick().await;
        sampler.tick().await;

        let emitted = drain(&mut events);
        assert_eq!(
            emitted,
            vec![MoodEvent::MoodChanged {
                mood: "happy".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn mood_change_emits_again() {
        let classifier = ScriptedClassifier::new(vec![
            Ok(face(&[("happy", 0.9)])),
            Ok(face(&[("sad", 0.7)])),
            Ok(face(&[("happy", 0.9)])),
        ]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        sampler.start_detection();

        for _ in 0..3 {
            sampler.tick().await;
        }

        let moods: Vec<_> = drain(&mut events)
            .into_iter()
            .map(|MoodEvent::MoodChanged { mood }| mood)
            .collect();
        assert_eq!(moods, vec!["happy", "sad", "happy"]);
    }

    #[tokio::test]
    async fn camera_restart_resets_last_mood() {
        let classifier = ScriptedClassifier::new(vec![
            Ok(face(&[("happy", 0.9)])),
            Ok(face(&[("happy", 0.9)])),
        ]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        sampler.start_detection();
        sampler.tick().await;
        assert_eq!(sampler.last_mood(), Some("happy"));

        sampler.stop_camera();
        sampler.start_camera().unwrap();
        assert_eq!(sampler.last_mood(), None);

        // Same mood as before the restart still emits
        sampler.start_detection();
        sampler.tick().await;

        assert_eq!(drain(&mut events).len(), 2);
    }

    #[tokio::test]
    async fn zero_faces_skip_without_state_change() {
        let classifier = ScriptedClassifier::new(vec![
            Ok(face(&[("happy", 0.9)])),
            Ok(vec![]),
            Ok(face(&[("happy", 0.9)])),
        ]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        sampler.start_detection();

        for _ in 0..3 {
            sampler.tick().await;
        }

        // The face-less tick neither emits nor clears the debounce state
        assert_eq!(drain(&mut events).len(), 1);
        assert_eq!(sampler.last_mood(), Some("happy"));
    }

    #[tokio::test]
    async fn tick_errors_are_swallowed_and_loop_continues() {
        let classifier = ScriptedClassifier::new(vec![
            Err(ClassifierError::Inference("model hiccup".to_string())),
            Ok(face(&[("sad", 0.6)])),
        ]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        sampler.start_detection();

        sampler.tick().await;
        assert!(drain(&mut events).is_empty());

        sampler.tick().await;
        assert_eq!(
            drain(&mut events),
            vec![MoodEvent::MoodChanged {
                mood: "sad".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn capture_failure_skips_tick() {
        let classifier = ScriptedClassifier::new(vec![Ok(face(&[("happy", 0.9)]))]);
        let (mut sampler, mut events) = sampler_with(classifier);
        sampler.camera.fail_capture = true;

        sampler.start_camera().unwrap();
        sampler.start_detection();
        sampler.tick().await;

        assert!(drain(&mut events).is_empty());
        assert_eq!(sampler.last_mood(), None);
    }

    #[tokio::test]
    async fn detection_requires_active_camera_and_loaded_model() {
        let (mut sampler, _events) = sampler_with(ScriptedClassifier::new(vec![]));

        // Camera not started yet
        assert!(!sampler.start_detection());

        sampler.start_camera().unwrap();
        assert!(sampler.start_detection());
        // Already running: stays active, no restart
        assert!(sampler.start_detection());

        sampler.stop_detection();
        assert!(!sampler.detection_active());

        let (mut sampler, _events) = sampler_with(ScriptedClassifier::not_loaded());
        sampler.start_camera().unwrap();
        assert!(!sampler.start_detection());
    }

    #[tokio::test]
    async fn tick_is_noop_while_detection_inactive() {
        let classifier = ScriptedClassifier::new(vec![Ok(face(&[("happy", 0.9)]))]);
        let (mut sampler, mut events) = sampler_with(classifier);

        sampler.start_camera().unwrap();
        // Detection never started
        sampler.tick().await;

        assert!(drain(&mut events).is_empty());
    }

    #[tokio::test]
    async fn acquisition_error_leaves_session_inactive() {
        let camera = TestCamera::failing_with(CameraError::Busy);
        let (mut sampler, _events) = MoodSampler::new(
            camera,
            ScriptedClassifier::new(vec![]),
            DetectionConfig::default(),
        );

        let err = sampler.start_camera().unwrap_err();
        assert!(matches!(err, CameraError::Busy));
        assert!(!sampler.camera_active());
        assert!(!sampler.start_detection());
    }

    #[tokio::test(start_paused = true)]
    async fn run_loop_ticks_and_releases_camera_on_shutdown() {
        let camera = TestCamera::working();
        let releases = Arc::clone(&camera.releases);

        let classifier = ScriptedClassifier::new(vec![Ok(face(&[("happy", 0.9)]))]);
        let (mut sampler, mut events) = MoodSampler::new(
            camera,
            classifier,
            DetectionConfig {
                interval: Duration::from_millis(10),
            },
        );
        sampler.start_camera().unwrap();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(sampler.run(shutdown.clone()));

        let event = events.recv().await.expect("loop should emit");
        assert_eq!(
            event,
            MoodEvent::MoodChanged {
                mood: "happy".to_string()
            }
        );

        shutdown.cancel();
        handle.await.unwrap();

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn drop_releases_active_camera() {
        let camera = TestCamera::working();
        let releases = Arc::clone(&camera.releases);

        let (mut sampler, _events) = MoodSampler::new(
            camera,
            ScriptedClassifier::new(vec![]),
            DetectionConfig::default(),
        );
        sampler.start_camera().unwrap();
        drop(sampler);

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
