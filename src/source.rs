//! Frame acquisition boundary.
//!
//! Real deployments plug a camera-backed source in here; the core only
//! requires RGB8 frames delivered in order with non-decreasing timestamps.
//! `SyntheticSource` generates flat frames on a frame-index clock for demos
//! and tests.

use std::time::Duration;

use anyhow::Result;

/// One RGB8 frame plus its offset from stream start.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Packed RGB8 pixel data, `width * height * 3` bytes.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Monotonic offset from stream start.
    pub timestamp: Duration,
}

/// Produces frames in arrival order with non-decreasing timestamps.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Frame>;
}

/// Synthetic source producing flat frames at a fixed nominal rate.
///
/// Timestamps derive from the frame index rather than a wall clock, so runs
/// are reproducible.
pub struct SyntheticSource {
    width: u32,
    height: u32,
    target_fps: u32,
    frame_index: u64,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32, target_fps: u32) -> Self {
        Self {
            width,
            height,
            target_fps: target_fps.max(1),
            frame_index: 0,
        }
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Frame> {
        let timestamp =
            Duration::from_secs_f64(self.frame_index as f64 / f64::from(self.target_fps));
        // Slight brightness drift keeps consecutive captures distinguishable.
        let shade = 96u8.wrapping_add((self.frame_index % 64) as u8);
        let data = vec![shade; self.width as usize * self.height as usize * 3];
        self.frame_index += 1;
        Ok(Frame {
            data,
            width: self.width,
            height: self.height,
            timestamp,
        })
    }
}
