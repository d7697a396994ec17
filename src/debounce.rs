//! Temporal smoothing of the raw status stream.

use crate::classify::FrameStatus;

/// Suppresses single-frame status flicker caused by detector noise.
///
/// The displayed status only changes after the same raw status has been
/// observed for `consistency_frames` consecutive frames, with one exception:
/// the very first observation is shown immediately, since there is nothing
/// better on screen yet. The consistency rule applies uniformly afterwards,
/// including the transition back to `Unknown` when all detections drop out.
#[derive(Clone, Debug)]
pub struct StatusDebouncer {
    consistency_frames: u32,
    last_raw: Option<FrameStatus>,
    consistent_count: u32,
    displayed: Option<FrameStatus>,
}

impl StatusDebouncer {
    /// A `consistency_frames` of zero is treated as one: every status stream
    /// needs at least one observation before it can be shown.
    pub fn new(consistency_frames: u32) -> Self {
        Self {
            consistency_frames: consistency_frames.max(1),
            last_raw: None,
            consistent_count: 0,
            displayed: None,
        }
    }

    /// Feed one raw status; returns the status to display for this frame.
    ///
    /// Must be called exactly once per frame, in arrival order. The returned
    /// value differs from the previous call's at most when the raw status has
    /// held steady for the full consistency window (or on the first call).
    pub fn update(&mut self, raw: FrameStatus) -> FrameStatus {
        if self.last_raw == Some(raw) {
            self.consistent_count = self.consistent_count.saturating_add(1);
        } else {
            self.last_raw = Some(raw);
            self.consistent_count = 1;
        }

        match self.displayed {
            Some(shown) if self.consistent_count < self.consistency_frames => shown,
            _ => {
                self.displayed = Some(raw);
                raw
            }
        }
    }

    /// Currently displayed status; absent before the first `update`.
    pub fn displayed(&self) -> Option<FrameStatus> {
        self.displayed
    }

    /// Consecutive frames the current raw status has been observed.
    pub fn consistent_count(&self) -> u32 {
        self.consistent_count
    }
}
