//! Safety Compliance Sentinel (SCS)
//!
//! This crate turns noisy per-frame object detections (people and head
//! coverings) into a temporally stable safety status and a once-per-episode
//! evidence capture policy.
//!
//! # Pipeline
//!
//! Per frame, in strict arrival order:
//!
//! 1. A detector backend emits labeled boxes; the detection boundary
//!    resolves labels and confidence cutoffs into typed detections.
//! 2. `classify` scores person/covering overlap into a raw status.
//! 3. `debounce` smooths the raw status stream into the displayed status.
//! 4. `capture` times sustained unsafe episodes and requests at most one
//!    evidence capture per episode; a storage collaborator owns the write.
//!
//! # Module Structure
//!
//! - `geometry`: axis-aligned boxes and overlap scoring
//! - `classify`: per-frame status from person/covering overlap
//! - `debounce`: consistency-threshold smoothing of the status stream
//! - `capture`: once-per-episode capture trigger
//! - `monitor`: per-frame orchestration owning the pipeline state
//! - `detect`: detector backend boundary (labels to typed detections)
//! - `source`: frame acquisition boundary
//! - `storage`: evidence capture stores
//! - `config`: sentineld configuration (file + env)

pub mod capture;
pub mod classify;
pub mod config;
pub mod debounce;
pub mod detect;
pub mod geometry;
pub mod monitor;
pub mod source;
pub mod storage;

pub use capture::CaptureTrigger;
pub use classify::{classify_frame, FrameClassification, FrameStatus};
pub use config::{CaptureSettings, SentinelConfig, SourceSettings, ThresholdSettings};
pub use debounce::StatusDebouncer;
pub use detect::{
    resolve_detections, Detection, DetectionThresholds, DetectorBackend, ObjectClass,
    RawDetection, StubBackend, TypedDetections,
};
pub use geometry::BoundingBox;
pub use monitor::{CaptureRequest, FrameAssessment, MonitorSettings, SafetyMonitor};
pub use source::{Frame, FrameSource, SyntheticSource};
pub use storage::{
    CaptureStore, FilesystemCaptureStore, InMemoryCaptureStore, DEFAULT_CAPTURE_DIR,
};
