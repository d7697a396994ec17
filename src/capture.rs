//! Once-per-episode evidence capture timing.

use std::time::Duration;

use crate::classify::FrameStatus;

/// Decides exactly once per sustained unsafe episode to request a capture.
///
/// An episode is a maximal contiguous run of `Unsafe` displayed status. The
/// trigger fires at the first tick where the episode has lasted at least
/// `unsafe_duration`, then stays quiet until the episode ends; leaving
/// `Unsafe` re-arms it for the next episode. Runs shorter than the threshold
/// never fire.
#[derive(Clone, Debug)]
pub struct CaptureTrigger {
    unsafe_duration: Duration,
    episode_start: Option<Duration>,
    captured: bool,
}

impl CaptureTrigger {
    pub fn new(unsafe_duration: Duration) -> Self {
        Self {
            unsafe_duration,
            episode_start: None,
            captured: false,
        }
    }

    /// Feed one displayed status and its frame timestamp; returns whether a
    /// capture should be taken for this frame.
    ///
    /// Timestamps must be non-decreasing across calls. The tick that starts
    /// an episode only records the start time and never fires, even with a
    /// zero duration threshold.
    pub fn update(&mut self, displayed: FrameStatus, now: Duration) -> bool {
        if displayed != FrameStatus::Unsafe {
            self.episode_start = None;
            self.captured = false;
            return false;
        }

        match self.episode_start {
            None => {
                self.episode_start = Some(now);
                false
            }
            Some(start) => {
                if !self.captured && now.saturating_sub(start) >= self.unsafe_duration {
                    self.captured = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// True while an unsafe episode is being timed or has already captured.
    pub fn episode_active(&self) -> bool {
        self.episode_start.is_some()
    }
}
