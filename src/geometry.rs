//! Axis-aligned box geometry for overlap scoring.
//!
//! All operations are total: inverted or zero-extent boxes are treated as
//! zero-area, never as errors.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in frame-pixel space, corner-coded as (x1, y1)..(x2, y2).
///
/// Callers are expected to supply x2 >= x1 and y2 >= y1, but nothing enforces
/// it; a degenerate box simply scores zero everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn width(&self) -> i64 {
        (i64::from(self.x2) - i64::from(self.x1)).max(0)
    }

    fn height(&self) -> i64 {
        (i64::from(self.y2) - i64::from(self.y1)).max(0)
    }

    /// Pixel area; zero for degenerate or inverted boxes.
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// Area shared with another box; zero when they do not meet.
    pub fn intersection_area(&self, other: &BoundingBox) -> i64 {
        let left = i64::from(self.x1.max(other.x1));
        let top = i64::from(self.y1.max(other.y1));
        let right = i64::from(self.x2.min(other.x2));
        let bottom = i64::from(self.y2.min(other.y2));
        let width = (right - left).max(0);
        let height = (bottom - top).max(0);
        width.saturating_mul(height)
    }

    /// Intersection-over-union in [0, 1].
    ///
    /// Symmetric. Zero for disjoint boxes and for any degenerate input,
    /// including the both-degenerate case where the union itself is empty.
    pub fn overlap_ratio(&self, other: &BoundingBox) -> f32 {
        let intersection = self.intersection_area(other);
        if intersection <= 0 {
            return 0.0;
        }
        let union = self
            .area()
            .saturating_add(other.area())
            .saturating_sub(intersection);
        if union <= 0 {
            return 0.0;
        }
        (intersection as f64 / union as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_boxes_overlap_fully() {
        let b = BoundingBox::new(10, 20, 110, 220);
        assert_eq!(b.overlap_ratio(&b), 1.0);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = BoundingBox::new(0, 0, 100, 100);
        let b = BoundingBox::new(50, 50, 150, 150);
        assert_eq!(a.overlap_ratio(&b), b.overlap_ratio(&a));
    }

    #[test]
    fn half_shifted_boxes_score_one_third() {
        // 10x10 boxes shifted by half a width: 50 shared out of 150 union.
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(5, 0, 15, 10);
        let ratio = a.overlap_ratio(&b);
        assert!((ratio - 1.0 / 3.0).abs() < 1e-6, "ratio was {ratio}");
    }

    #[test]
    fn disjoint_boxes_score_zero() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(20, 20, 30, 30);
        assert_eq!(a.overlap_ratio(&b), 0.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(10, 0, 20, 10);
        assert_eq!(a.overlap_ratio(&b), 0.0);
    }

    #[test]
    fn degenerate_and_inverted_boxes_are_zero_area() {
        let point = BoundingBox::new(5, 5, 5, 5);
        let inverted = BoundingBox::new(10, 10, 0, 0);
        let normal = BoundingBox::new(0, 0, 100, 100);

        assert_eq!(point.area(), 0);
        assert_eq!(inverted.area(), 0);
        assert_eq!(point.overlap_ratio(&normal), 0.0);
        assert_eq!(inverted.overlap_ratio(&normal), 0.0);
        assert_eq!(point.overlap_ratio(&point), 0.0);
    }
}
