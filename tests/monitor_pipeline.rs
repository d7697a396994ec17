use std::time::Duration;

use safety_sentinel::{
    resolve_detections, BoundingBox, CaptureStore, DetectionThresholds, DetectorBackend,
    FrameSource, FrameStatus, InMemoryCaptureStore, MonitorSettings, SafetyMonitor, StubBackend,
    SyntheticSource,
};

fn settings() -> MonitorSettings {
    MonitorSettings {
        overlap_threshold: 0.2,
        consistency_frames: 5,
        unsafe_duration: Duration::from_secs(2),
    }
}

fn person() -> BoundingBox {
    BoundingBox::new(100, 50, 300, 470)
}

fn helmet() -> BoundingBox {
    // Top third of the person box: overlap ratio 1/3, above the 0.2 cutoff.
    BoundingBox::new(100, 50, 300, 190)
}

fn ts(frame: u64) -> Duration {
    // Frames 0.1s apart.
    Duration::from_millis(frame * 100)
}

#[test]
fn sustained_unsafe_run_captures_once_then_rearms() {
    let mut monitor = SafetyMonitor::new(settings());
    let mut captures = Vec::new();

    // Establish a displayed Safe status first.
    for frame in 0..10 {
        let assessment = monitor.process(&[person()], &[helmet()], ts(frame));
        assert_eq!(assessment.displayed_status, FrameStatus::Safe);
        assert_eq!(assessment.covered, vec![true]);
    }

    // Unsafe raw stream: the display flips on the 5th consecutive frame.
    for frame in 10..37 {
        let assessment = monitor.process(&[person()], &[], ts(frame));
        assert_eq!(assessment.raw_status, FrameStatus::Unsafe);
        assert_eq!(assessment.covered, vec![false]);
        if frame < 14 {
            assert_eq!(assessment.displayed_status, FrameStatus::Safe);
        } else {
            assert_eq!(assessment.displayed_status, FrameStatus::Unsafe);
        }
        captures.extend(assessment.capture);
    }

    // Episode started at t=1.4s (first displayed-unsafe tick); the single
    // capture fires at the first tick with 2.0s elapsed, t=3.4s.
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].timestamp, ts(34));

    // Back to safe: display holds Unsafe until 5 consistent frames.
    for frame in 37..42 {
        let assessment = monitor.process(&[person()], &[helmet()], ts(frame));
        assert!(assessment.capture.is_none());
        if frame < 41 {
            assert_eq!(assessment.displayed_status, FrameStatus::Unsafe);
        } else {
            assert_eq!(assessment.displayed_status, FrameStatus::Safe);
        }
    }

    // A second sustained unsafe run captures exactly once more.
    let mut second_captures = Vec::new();
    for frame in 42..70 {
        let assessment = monitor.process(&[person()], &[], ts(frame));
        second_captures.extend(assessment.capture);
    }
    assert_eq!(second_captures.len(), 1);
    // Display flipped at frame 46 (t=4.6s); 2.0s later is t=6.6s.
    assert_eq!(second_captures[0].timestamp, ts(66));
}

#[test]
fn unsafe_from_the_first_frame_bootstraps_and_captures() {
    let mut monitor = SafetyMonitor::new(settings());
    let mut captures = Vec::new();

    for frame in 0..25 {
        let assessment = monitor.process(&[person()], &[], ts(frame));
        // Bootstrap: the very first observation is shown immediately.
        assert_eq!(assessment.displayed_status, FrameStatus::Unsafe);
        captures.extend(assessment.capture);
    }

    // Episode start t=0.0s, capture at t=2.0s.
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].timestamp, ts(20));
}

#[test]
fn brief_flicker_never_reaches_the_capture_path() {
    let mut monitor = SafetyMonitor::new(settings());

    for frame in 0..10 {
        monitor.process(&[person()], &[helmet()], ts(frame));
    }
    // Unsafe bursts shorter than the consistency window, repeated for a
    // long stretch: the displayed status never changes, so no episode ever
    // starts no matter the total unsafe time.
    for burst in 0..20u64 {
        let base = 10 + burst * 5;
        for frame in base..base + 4 {
            let assessment = monitor.process(&[person()], &[], ts(frame));
            assert_eq!(assessment.displayed_status, FrameStatus::Safe);
            assert!(assessment.capture.is_none());
        }
        let assessment = monitor.process(&[person()], &[helmet()], ts(base + 4));
        assert_eq!(assessment.displayed_status, FrameStatus::Safe);
        assert!(assessment.capture.is_none());
    }
}

#[test]
fn full_pipeline_from_backend_to_store() {
    let mut source = SyntheticSource::new(320, 240, 10);
    let mut backend = StubBackend::new(20, 60);
    let mut monitor = SafetyMonitor::new(settings());
    let mut store = InMemoryCaptureStore::new();
    let thresholds = DetectionThresholds::default();

    for _ in 0..100 {
        let frame = source.next_frame().expect("frame");
        let raw = backend
            .detect(&frame.data, frame.width, frame.height)
            .expect("detect");
        let detections = resolve_detections(raw, thresholds);
        let assessment = monitor.process(
            &detections.person_boxes(),
            &detections.covering_boxes(),
            frame.timestamp,
        );
        if let Some(request) = assessment.capture {
            store.store(&frame, &request).expect("store");
        }
    }

    // Violation spans frames 20..80; display flips unsafe at frame 24
    // (t=2.4s) and the capture fires 2.0s later at t=4.4s.
    assert_eq!(store.captured().len(), 1);
    assert_eq!(store.captured()[0].timestamp, Duration::from_millis(4400));
}
