use anyhow::Result;

use crate::detect::backend::DetectorBackend;
use crate::detect::result::RawDetection;
use crate::geometry::BoundingBox;

/// Stub backend for demos and tests.
///
/// Emits a scripted scene: one person roughly centered in the frame, wearing
/// a helmet except during a configurable window of frame indices. With
/// `repeating`, the window recurs every `period` frames so a long-running
/// daemon keeps producing episodes.
pub struct StubBackend {
    frame_index: u64,
    violation_start: u64,
    violation_frames: u64,
    repeat_every: Option<u64>,
}

impl StubBackend {
    /// One violation window of `violation_frames` frames starting at
    /// `violation_start`.
    pub fn new(violation_start: u64, violation_frames: u64) -> Self {
        Self {
            frame_index: 0,
            violation_start,
            violation_frames,
            repeat_every: None,
        }
    }

    /// Repeat the violation window every `period` frames.
    pub fn repeating(mut self, period: u64) -> Self {
        self.repeat_every = Some(period.max(1));
        self
    }

    fn in_violation(&self) -> bool {
        let index = match self.repeat_every {
            Some(period) => self.frame_index % period,
            None => self.frame_index,
        };
        index >= self.violation_start && index < self.violation_start + self.violation_frames
    }
}

impl DetectorBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(&mut self, _pixels: &[u8], width: u32, height: u32) -> Result<Vec<RawDetection>> {
        let w = width as i32;
        let h = height as i32;

        // One person filling the center of the frame.
        let person = BoundingBox::new(w / 4, h / 4, 3 * w / 4, h);
        let mut detections = vec![RawDetection {
            label: "person".to_string(),
            confidence: 0.9,
            bbox: person,
        }];

        if !self.in_violation() {
            // Helmet over the top of the person box; one third of the
            // person's area, comfortably above the default 0.2 overlap.
            detections.push(RawDetection {
                label: "helmet".to_string(),
                confidence: 0.8,
                bbox: BoundingBox::new(w / 4, h / 4, 3 * w / 4, h / 2),
            });
        }

        self.frame_index += 1;
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helmet_disappears_inside_the_violation_window() {
        let mut backend = StubBackend::new(2, 3);
        let mut labels_per_frame = Vec::new();
        for _ in 0..6 {
            let raw = backend.detect(&[], 640, 480).expect("stub detect");
            labels_per_frame.push(raw.len());
        }
        // Frames 0-1 and 5 have person+helmet, frames 2-4 person only.
        assert_eq!(labels_per_frame, vec![2, 2, 1, 1, 1, 2]);
    }

    #[test]
    fn repeating_window_recurs() {
        let mut backend = StubBackend::new(0, 1).repeating(3);
        let mut counts = Vec::new();
        for _ in 0..6 {
            counts.push(backend.detect(&[], 640, 480).expect("stub detect").len());
        }
        assert_eq!(counts, vec![1, 2, 2, 1, 2, 2]);
    }
}
