//! Per-frame safety classification from person/head-covering overlap.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// Raw per-frame safety status, before temporal smoothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameStatus {
    /// No people detected in the frame.
    Unknown,
    /// Every detected person has a qualifying head covering.
    Safe,
    /// At least one detected person lacks a head covering.
    Unsafe,
}

impl FrameStatus {
    /// On-screen banner text used by rendering collaborators.
    pub fn label(&self) -> &'static str {
        match self {
            FrameStatus::Unknown => "NO DETECTION",
            FrameStatus::Safe => "SAFE",
            FrameStatus::Unsafe => "UNSAFE",
        }
    }

    /// RGB banner color hint: gray, green, red.
    pub fn color_rgb(&self) -> [u8; 3] {
        match self {
            FrameStatus::Unknown => [128, 128, 128],
            FrameStatus::Safe => [0, 255, 0],
            FrameStatus::Unsafe => [255, 0, 0],
        }
    }
}

/// Outcome of classifying one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameClassification {
    pub status: FrameStatus,
    /// Per-person coverage verdicts, parallel to the input person boxes.
    pub covered: Vec<bool>,
}

/// Classify one frame from its person and head-covering boxes.
///
/// A person counts as covered when any covering box overlaps it by at least
/// `overlap_threshold`. No people yields `Unknown` with an empty verdict
/// list; a single uncovered person makes the whole frame `Unsafe`.
///
/// Pure function of its inputs; holds no state across frames.
pub fn classify_frame(
    persons: &[BoundingBox],
    coverings: &[BoundingBox],
    overlap_threshold: f32,
) -> FrameClassification {
    if persons.is_empty() {
        return FrameClassification {
            status: FrameStatus::Unknown,
            covered: Vec::new(),
        };
    }

    let covered: Vec<bool> = persons
        .iter()
        .map(|person| {
            coverings
                .iter()
                .any(|covering| person.overlap_ratio(covering) >= overlap_threshold)
        })
        .collect();

    let status = if covered.iter().all(|is_covered| *is_covered) {
        FrameStatus::Safe
    } else {
        FrameStatus::Unsafe
    };

    FrameClassification { status, covered }
}
