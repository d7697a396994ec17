//! Evidence capture storage.
//!
//! The core decides *when* to capture; stores own the *where* and *how*. A
//! failed write surfaces as an error and must be treated as non-fatal by the
//! caller: the trigger stays latched for the episode, so a failure is not
//! retried until a new episode begins.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use crate::monitor::CaptureRequest;
use crate::source::Frame;

/// Default directory for unsafe-episode captures.
pub const DEFAULT_CAPTURE_DIR: &str = "unsafe_captures";

/// Storage collaborator for evidence captures.
pub trait CaptureStore {
    /// Persist the undecorated frame for a capture request, returning where
    /// it was written.
    fn store(&mut self, frame: &Frame, request: &CaptureRequest) -> Result<PathBuf>;
}

/// Writes captures as JPEG files named `unsafe_<epoch-millis>.jpg`.
pub struct FilesystemCaptureStore {
    dir: PathBuf,
}

impl FilesystemCaptureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating capture directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CaptureStore for FilesystemCaptureStore {
    fn store(&mut self, frame: &Frame, _request: &CaptureRequest) -> Result<PathBuf> {
        let expected = frame.width as usize * frame.height as usize * 3;
        if frame.data.len() != expected {
            return Err(anyhow!(
                "frame data is {} bytes, expected {} for {}x{} RGB8",
                frame.data.len(),
                expected,
                frame.width,
                frame.height
            ));
        }

        let epoch_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
        let path = self.dir.join(format!("unsafe_{}.jpg", epoch_ms));

        let file = fs::File::create(&path)
            .with_context(|| format!("creating capture file {}", path.display()))?;
        let mut encoder = JpegEncoder::new(BufWriter::new(file));
        encoder
            .encode(&frame.data, frame.width, frame.height, ExtendedColorType::Rgb8)
            .with_context(|| format!("encoding capture {}", path.display()))?;

        Ok(path)
    }
}

/// Test store that records requests without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryCaptureStore {
    captured: Vec<CaptureRequest>,
}

impl InMemoryCaptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> &[CaptureRequest] {
        &self.captured
    }
}

impl CaptureStore for InMemoryCaptureStore {
    fn store(&mut self, _frame: &Frame, request: &CaptureRequest) -> Result<PathBuf> {
        self.captured.push(*request);
        Ok(PathBuf::from(format!("mem:{}", self.captured.len())))
    }
}
