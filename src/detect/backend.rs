use anyhow::Result;

use crate::detect::result::RawDetection;

/// Detector backend trait.
///
/// Implementations run whatever inference stack they like (ONNX, remote,
/// synthetic) and hand back labeled boxes in frame-pixel coordinates.
/// Label resolution and confidence filtering happen at the detection
/// boundary, not inside backends.
pub trait DetectorBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Run detection on one RGB8 frame.
    ///
    /// Implementations must treat the pixel slice as read-only and
    /// ephemeral. A failed inference is reported as an error; the caller
    /// decides whether to skip the frame.
    fn detect(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<Vec<RawDetection>>;

    /// Optional warm-up hook.
    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }
}
