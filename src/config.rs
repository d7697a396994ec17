use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::detect::DetectionThresholds;
use crate::monitor::MonitorSettings;
use crate::storage::DEFAULT_CAPTURE_DIR;

const DEFAULT_PERSON_CONFIDENCE: f32 = 0.4;
const DEFAULT_HEAD_COVERING_CONFIDENCE: f32 = 0.2;
const DEFAULT_OVERLAP_THRESHOLD: f32 = 0.2;
const DEFAULT_CONSISTENCY_FRAMES: u32 = 5;
const DEFAULT_UNSAFE_DURATION_SECS: f64 = 2.0;
const DEFAULT_TARGET_FPS: u32 = 10;
const DEFAULT_FRAME_WIDTH: u32 = 640;
const DEFAULT_FRAME_HEIGHT: u32 = 480;

#[derive(Debug, Deserialize, Default)]
struct SentinelConfigFile {
    thresholds: Option<ThresholdConfigFile>,
    capture: Option<CaptureConfigFile>,
    source: Option<SourceConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
struct ThresholdConfigFile {
    person_confidence: Option<f32>,
    head_covering_confidence: Option<f32>,
    overlap: Option<f32>,
    consistency_frames: Option<u32>,
    unsafe_duration_secs: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct CaptureConfigFile {
    dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct SourceConfigFile {
    target_fps: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct SentinelConfig {
    pub thresholds: ThresholdSettings,
    pub capture: CaptureSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone)]
pub struct ThresholdSettings {
    pub person_confidence: f32,
    pub head_covering_confidence: f32,
    pub overlap: f32,
    pub consistency_frames: u32,
    pub unsafe_duration: Duration,
}

#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub target_fps: u32,
    pub width: u32,
    pub height: u32,
}

impl SentinelConfig {
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("SENTINEL_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default())?;
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: SentinelConfigFile) -> Result<Self> {
        let thresholds_file = file.thresholds.unwrap_or_default();
        let unsafe_duration_secs = thresholds_file
            .unsafe_duration_secs
            .unwrap_or(DEFAULT_UNSAFE_DURATION_SECS);
        let thresholds = ThresholdSettings {
            person_confidence: thresholds_file
                .person_confidence
                .unwrap_or(DEFAULT_PERSON_CONFIDENCE),
            head_covering_confidence: thresholds_file
                .head_covering_confidence
                .unwrap_or(DEFAULT_HEAD_COVERING_CONFIDENCE),
            overlap: thresholds_file.overlap.unwrap_or(DEFAULT_OVERLAP_THRESHOLD),
            consistency_frames: thresholds_file
                .consistency_frames
                .unwrap_or(DEFAULT_CONSISTENCY_FRAMES),
            unsafe_duration: duration_from_secs(unsafe_duration_secs)?,
        };
        let capture = CaptureSettings {
            dir: file
                .capture
                .and_then(|capture| capture.dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CAPTURE_DIR)),
        };
        let source_file = file.source.unwrap_or_default();
        let source = SourceSettings {
            target_fps: source_file.target_fps.unwrap_or(DEFAULT_TARGET_FPS),
            width: source_file.width.unwrap_or(DEFAULT_FRAME_WIDTH),
            height: source_file.height.unwrap_or(DEFAULT_FRAME_HEIGHT),
        };
        Ok(Self {
            thresholds,
            capture,
            source,
        })
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("SENTINEL_CAPTURE_DIR") {
            if !dir.trim().is_empty() {
                self.capture.dir = PathBuf::from(dir);
            }
        }
        if let Ok(overlap) = std::env::var("SENTINEL_OVERLAP_THRESHOLD") {
            self.thresholds.overlap = overlap
                .parse()
                .map_err(|_| anyhow!("SENTINEL_OVERLAP_THRESHOLD must be a number"))?;
        }
        if let Ok(frames) = std::env::var("SENTINEL_CONSISTENCY_FRAMES") {
            self.thresholds.consistency_frames = frames
                .parse()
                .map_err(|_| anyhow!("SENTINEL_CONSISTENCY_FRAMES must be an integer"))?;
        }
        if let Ok(secs) = std::env::var("SENTINEL_UNSAFE_DURATION_SECS") {
            let secs: f64 = secs
                .parse()
                .map_err(|_| anyhow!("SENTINEL_UNSAFE_DURATION_SECS must be a number of seconds"))?;
            self.thresholds.unsafe_duration = duration_from_secs(secs)?;
        }
        if let Ok(fps) = std::env::var("SENTINEL_TARGET_FPS") {
            self.source.target_fps = fps
                .parse()
                .map_err(|_| anyhow!("SENTINEL_TARGET_FPS must be an integer"))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        validate_ratio("thresholds.person_confidence", self.thresholds.person_confidence)?;
        validate_ratio(
            "thresholds.head_covering_confidence",
            self.thresholds.head_covering_confidence,
        )?;
        validate_ratio("thresholds.overlap", self.thresholds.overlap)?;
        if self.thresholds.consistency_frames == 0 {
            return Err(anyhow!("thresholds.consistency_frames must be at least 1"));
        }
        if self.thresholds.unsafe_duration.is_zero() {
            return Err(anyhow!("thresholds.unsafe_duration_secs must be greater than zero"));
        }
        if self.source.target_fps == 0 {
            return Err(anyhow!("source.target_fps must be at least 1"));
        }
        if self.source.width == 0 || self.source.height == 0 {
            return Err(anyhow!("source dimensions must be at least 1x1"));
        }
        Ok(())
    }

    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            overlap_threshold: self.thresholds.overlap,
            consistency_frames: self.thresholds.consistency_frames,
            unsafe_duration: self.thresholds.unsafe_duration,
        }
    }

    pub fn detection_thresholds(&self) -> DetectionThresholds {
        DetectionThresholds {
            person_confidence: self.thresholds.person_confidence,
            head_covering_confidence: self.thresholds.head_covering_confidence,
        }
    }
}

fn duration_from_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(anyhow!(
            "unsafe duration must be a positive number of seconds, got {}",
            secs
        ));
    }
    Ok(Duration::from_secs_f64(secs))
}

fn validate_ratio(name: &str, value: f32) -> Result<()> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(anyhow!("{} must be in (0, 1], got {}", name, value));
    }
    Ok(())
}

fn read_config_file(path: &Path) -> Result<SentinelConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}
