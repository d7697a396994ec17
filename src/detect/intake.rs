use crate::detect::result::{Detection, ObjectClass, RawDetection};
use crate::geometry::BoundingBox;

/// Upstream confidence cutoffs applied before detections reach the core.
#[derive(Clone, Copy, Debug)]
pub struct DetectionThresholds {
    pub person_confidence: f32,
    pub head_covering_confidence: f32,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            person_confidence: 0.4,
            head_covering_confidence: 0.2,
        }
    }
}

/// Detections split by role, ready for classification.
#[derive(Clone, Debug, Default)]
pub struct TypedDetections {
    pub persons: Vec<Detection>,
    pub coverings: Vec<Detection>,
}

impl TypedDetections {
    pub fn person_boxes(&self) -> Vec<BoundingBox> {
        self.persons.iter().map(|det| det.bbox).collect()
    }

    pub fn covering_boxes(&self) -> Vec<BoundingBox> {
        self.coverings.iter().map(|det| det.bbox).collect()
    }
}

/// Resolve model labels to typed detections and apply confidence cutoffs.
///
/// This is the only place label strings are interpreted. Matching is
/// case-insensitive; labels outside the recognized vocabulary ("head" boxes
/// included, which contribute nothing to coverage) are dropped.
pub fn resolve_detections(
    raw: Vec<RawDetection>,
    thresholds: DetectionThresholds,
) -> TypedDetections {
    let mut typed = TypedDetections::default();
    for detection in raw {
        let class = match detection.label.to_ascii_lowercase().as_str() {
            "person" => ObjectClass::Person,
            "helmet" => ObjectClass::HeadCovering,
            _ => continue,
        };
        let (min_confidence, bucket) = match class {
            ObjectClass::Person => (thresholds.person_confidence, &mut typed.persons),
            ObjectClass::HeadCovering => {
                (thresholds.head_covering_confidence, &mut typed.coverings)
            }
        };
        if detection.confidence < min_confidence {
            continue;
        }
        bucket.push(Detection {
            class,
            confidence: detection.confidence,
            bbox: detection.bbox,
        });
    }
    typed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(label: &str, confidence: f32) -> RawDetection {
        RawDetection {
            label: label.to_string(),
            confidence,
            bbox: BoundingBox::new(0, 0, 100, 100),
        }
    }

    #[test]
    fn labels_resolve_case_insensitively() {
        let typed = resolve_detections(
            vec![raw("Person", 0.9), raw("HELMET", 0.9)],
            DetectionThresholds::default(),
        );
        assert_eq!(typed.persons.len(), 1);
        assert_eq!(typed.persons[0].class, ObjectClass::Person);
        assert_eq!(typed.coverings.len(), 1);
        assert_eq!(typed.coverings[0].class, ObjectClass::HeadCovering);
    }

    #[test]
    fn unrecognized_labels_are_dropped() {
        let typed = resolve_detections(
            vec![raw("head", 0.9), raw("dog", 0.9)],
            DetectionThresholds::default(),
        );
        assert!(typed.persons.is_empty());
        assert!(typed.coverings.is_empty());
    }

    #[test]
    fn per_class_confidence_cutoffs_apply() {
        let thresholds = DetectionThresholds {
            person_confidence: 0.4,
            head_covering_confidence: 0.2,
        };
        let typed = resolve_detections(
            vec![
                raw("person", 0.39),
                raw("person", 0.41),
                raw("helmet", 0.19),
                raw("helmet", 0.21),
            ],
            thresholds,
        );
        assert_eq!(typed.persons.len(), 1);
        assert!((typed.persons[0].confidence - 0.41).abs() < f32::EPSILON);
        assert_eq!(typed.coverings.len(), 1);
        assert!((typed.coverings[0].confidence - 0.21).abs() < f32::EPSILON);
    }
}
