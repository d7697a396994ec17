//! sentineld - Safety Compliance Sentinel daemon
//!
//! This daemon:
//! 1. Ingests frames from the configured source
//! 2. Runs the detector backend and resolves labels at the boundary
//! 3. Classifies, debounces and times unsafe episodes
//! 4. Stores one evidence JPEG per sustained unsafe episode

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use safety_sentinel::{
    resolve_detections, CaptureStore, DetectorBackend, FilesystemCaptureStore, FrameSource,
    FrameStatus, SafetyMonitor, SentinelConfig, StubBackend, SyntheticSource,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SentinelConfig::load()?;
    let thresholds = cfg.detection_thresholds();
    let mut monitor = SafetyMonitor::new(cfg.monitor_settings());
    let mut store = FilesystemCaptureStore::new(&cfg.capture.dir)?;

    let mut source = SyntheticSource::new(cfg.source.width, cfg.source.height, cfg.source.target_fps);
    // Scripted backend until a real inference backend is wired in: a helmet
    // violation of 8 seconds recurring every 40 seconds at the default rate.
    let mut backend = StubBackend::new(60, 80).repeating(400);
    backend.warm_up()?;

    log::info!(
        "sentineld running. backend={} capture_dir={}",
        backend.name(),
        cfg.capture.dir.display()
    );
    log::info!(
        "thresholds: overlap={:.2} consistency={} unsafe_duration={:.1}s",
        cfg.thresholds.overlap,
        cfg.thresholds.consistency_frames,
        cfg.thresholds.unsafe_duration.as_secs_f64()
    );

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    let frame_interval = Duration::from_millis(1000 / u64::from(cfg.source.target_fps.max(1)));
    let mut frame_count = 0u64;
    let mut capture_count = 0u64;
    let mut last_shown: Option<FrameStatus> = None;

    while running.load(Ordering::SeqCst) {
        let frame = source.next_frame()?;

        let raw = match backend.detect(&frame.data, frame.width, frame.height) {
            Ok(raw) => raw,
            Err(e) => {
                // Skip the frame entirely rather than feed the debouncer a guess.
                log::warn!("inference failed, skipping frame: {}", e);
                continue;
            }
        };
        let detections = resolve_detections(raw, thresholds);
        let assessment = monitor.process(
            &detections.person_boxes(),
            &detections.covering_boxes(),
            frame.timestamp,
        );

        if last_shown != Some(assessment.displayed_status) {
            log::info!("status: {}", assessment.displayed_status.label());
            last_shown = Some(assessment.displayed_status);
        }

        if let Some(request) = assessment.capture {
            match store.store(&frame, &request) {
                Ok(path) => {
                    capture_count += 1;
                    log::info!("capture #{} stored at {}", capture_count, path.display());
                }
                Err(e) => {
                    // Non-fatal: the episode stays latched, no retry until re-arm.
                    log::error!("capture write failed: {}", e);
                }
            }
        }

        frame_count += 1;
        if frame_count % 100 == 0 {
            log::debug!("processed {} frames, {} captures", frame_count, capture_count);
        }

        std::thread::sleep(frame_interval);
    }

    log::info!(
        "sentineld stopped after {} frames, {} captures",
        frame_count,
        capture_count
    );
    Ok(())
}
