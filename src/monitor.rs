//! Per-frame orchestration of the safety pipeline.
//!
//! One `SafetyMonitor` owns the debounce and capture state for one frame
//! stream. Frames must be processed in arrival order with non-decreasing
//! timestamps; there is a single logical writer and no locking.

use std::time::Duration;

use crate::capture::CaptureTrigger;
use crate::classify::{classify_frame, FrameStatus};
use crate::debounce::StatusDebouncer;
use crate::geometry::BoundingBox;

/// Tuning for the per-frame safety pipeline.
#[derive(Clone, Copy, Debug)]
pub struct MonitorSettings {
    /// Minimum overlap ratio for a head covering to count as worn.
    pub overlap_threshold: f32,
    /// Frames of stable raw status before the displayed status changes.
    pub consistency_frames: u32,
    /// Minimum contiguous unsafe duration before a capture is requested.
    pub unsafe_duration: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            overlap_threshold: 0.2,
            consistency_frames: 5,
            unsafe_duration: Duration::from_secs(2),
        }
    }
}

/// A capture decision for one frame, handed to the storage collaborator
/// together with the original, undecorated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Timestamp of the frame that triggered the capture.
    pub timestamp: Duration,
}

/// Everything a caller needs to render and act on one processed frame.
#[derive(Clone, Debug)]
pub struct FrameAssessment {
    /// Un-smoothed classification of this frame alone.
    pub raw_status: FrameStatus,
    /// Debounced status to show the operator.
    pub displayed_status: FrameStatus,
    /// Per-person coverage verdicts, parallel to the person boxes passed in.
    pub covered: Vec<bool>,
    /// Set when this frame should be persisted as evidence.
    pub capture: Option<CaptureRequest>,
}

/// Threads each frame through classification, debouncing and capture timing.
pub struct SafetyMonitor {
    overlap_threshold: f32,
    debouncer: StatusDebouncer,
    trigger: CaptureTrigger,
}

impl SafetyMonitor {
    pub fn new(settings: MonitorSettings) -> Self {
        Self {
            overlap_threshold: settings.overlap_threshold,
            debouncer: StatusDebouncer::new(settings.consistency_frames),
            trigger: CaptureTrigger::new(settings.unsafe_duration),
        }
    }

    /// Process one frame's detections. Call once per frame, in order.
    pub fn process(
        &mut self,
        persons: &[BoundingBox],
        coverings: &[BoundingBox],
        timestamp: Duration,
    ) -> FrameAssessment {
        let classification = classify_frame(persons, coverings, self.overlap_threshold);
        let displayed = self.debouncer.update(classification.status);

        let was_active = self.trigger.episode_active();
        let fired = self.trigger.update(displayed, timestamp);
        if !was_active && self.trigger.episode_active() {
            log::info!("unsafe episode started at t={:.1}s", timestamp.as_secs_f64());
        } else if was_active && !self.trigger.episode_active() {
            log::info!("unsafe episode ended at t={:.1}s", timestamp.as_secs_f64());
        }

        let capture = if fired {
            log::info!(
                "capture requested for unsafe episode at t={:.1}s",
                timestamp.as_secs_f64()
            );
            Some(CaptureRequest { timestamp })
        } else {
            None
        };

        FrameAssessment {
            raw_status: classification.status,
            displayed_status: displayed,
            covered: classification.covered,
            capture,
        }
    }

    /// Currently displayed status; absent before the first frame.
    pub fn displayed_status(&self) -> Option<FrameStatus> {
        self.debouncer.displayed()
    }
}
