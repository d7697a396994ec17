use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// Untyped detector output, straight from a model's vocabulary.
///
/// Only the detection boundary looks at `label`; nothing downstream of
/// `resolve_detections` compares strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDetection {
    pub label: String,
    /// Model confidence in [0, 1].
    pub confidence: f32,
    /// Box in frame-pixel coordinates.
    pub bbox: BoundingBox,
}

/// A detection whose role has been resolved against the model vocabulary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub class: ObjectClass,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectClass {
    Person,
    HeadCovering,
}
