//! demo - scripted end-to-end run for the Safety Compliance Sentinel

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use safety_sentinel::{
    resolve_detections, CaptureStore, DetectionThresholds, DetectorBackend,
    FilesystemCaptureStore, FrameSource, FrameStatus, MonitorSettings, SafetyMonitor,
    StubBackend, SyntheticSource,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Duration in seconds of synthetic footage.
    #[arg(long, default_value_t = 10)]
    seconds: u64,
    /// Frames per second for the synthetic source.
    #[arg(long, default_value_t = 10)]
    fps: u32,
    /// Frame index where the scripted helmet violation begins.
    #[arg(long, default_value_t = 30)]
    violation_start: u64,
    /// Length of the scripted violation, in frames.
    #[arg(long, default_value_t = 40)]
    violation_frames: u64,
    /// Output directory for evidence captures.
    #[arg(long, default_value = "demo_captures")]
    out: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.fps == 0 {
        return Err(anyhow!("fps must be >= 1"));
    }

    stage("set up pipeline");
    let out_dir = PathBuf::from(&args.out);
    let mut store = FilesystemCaptureStore::new(&out_dir)?;
    let mut source = SyntheticSource::new(320, 240, args.fps);
    let mut backend = StubBackend::new(args.violation_start, args.violation_frames);
    backend.warm_up()?;
    let mut monitor = SafetyMonitor::new(MonitorSettings::default());
    let thresholds = DetectionThresholds::default();

    stage("run synthetic footage");
    let total_frames = args.seconds.saturating_mul(u64::from(args.fps));
    let mut shown: Option<FrameStatus> = None;
    let mut transitions = 0u64;
    let mut unsafe_frames = 0u64;
    let mut capture_paths = Vec::new();

    for _ in 0..total_frames {
        let frame = source.next_frame()?;
        let raw = backend.detect(&frame.data, frame.width, frame.height)?;
        let detections = resolve_detections(raw, thresholds);
        let assessment = monitor.process(
            &detections.person_boxes(),
            &detections.covering_boxes(),
            frame.timestamp,
        );

        if assessment.raw_status == FrameStatus::Unsafe {
            unsafe_frames += 1;
        }
        if shown != Some(assessment.displayed_status) {
            transitions += 1;
            shown = Some(assessment.displayed_status);
            eprintln!(
                "demo: t={:.1}s status -> {}",
                frame.timestamp.as_secs_f64(),
                assessment.displayed_status.label()
            );
        }
        if let Some(request) = assessment.capture {
            let path = store.store(&frame, &request)?;
            capture_paths.push(path);
        }
    }

    println!("demo summary:");
    println!("  frames processed: {}", total_frames);
    println!("  raw unsafe frames: {}", unsafe_frames);
    println!("  displayed transitions: {}", transitions);
    println!("  captures stored: {}", capture_paths.len());
    for path in &capture_paths {
        println!("    {}", path.display());
    }
    println!("  capture dir: {}", out_dir.display());
    println!("next steps:");
    println!("  cargo run --bin demo -- --seconds 30 --violation-frames 120");
    println!("  ls -la {}", out_dir.display());

    Ok(())
}

fn stage(msg: &str) {
    eprintln!("demo: {}", msg);
}
