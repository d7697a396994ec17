//! Detection boundary.
//!
//! Backends emit `RawDetection`s labeled with whatever vocabulary their
//! model uses; `resolve_detections` interprets those labels and applies the
//! upstream confidence cutoffs exactly once, so the core pipeline only ever
//! sees capability-typed `Detection`s and never compares strings.

mod backend;
mod backends;
mod intake;
mod result;

pub use backend::DetectorBackend;
pub use backends::StubBackend;
pub use intake::{resolve_detections, DetectionThresholds, TypedDetections};
pub use result::{Detection, ObjectClass, RawDetection};
