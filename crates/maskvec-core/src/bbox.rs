//! Axis-aligned bounding boxes
//!
//! Used both for the prompt box handed to a predictor and as a cheap
//! spatial filter before exact polygon overlap is computed.

use serde::{Deserialize, Serialize};

/// Axis-aligned box with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    /// Create from two opposite corners given in any order
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Check whether the boxes share at least one point (touching counts)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Corners truncated to integer pixels: `(x0, y0, x1, y1)`
    pub fn to_pixels(&self) -> (i32, i32, i32, i32) {
        (
            self.x0 as i32,
            self.y0 as i32,
            self.x1 as i32,
            self.y1 as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_normalised() {
        let bbox = BoundingBox::from_corners((200.0, 90.0), (123.0, 45.0));
        assert_eq!(bbox.x0, 123.0);
        assert_eq!(bbox.y0, 45.0);
        assert_eq!(bbox.width(), 77.0);
        assert_eq!(bbox.height(), 45.0);
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::from_corners((0.0, 0.0), (10.0, 10.0));
        let b = BoundingBox::from_corners((10.0, 5.0), (20.0, 20.0));
        let c = BoundingBox::from_corners((11.0, 0.0), (20.0, 10.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_pixels_truncate() {
        let bbox = BoundingBox::from_corners((1.9, 2.2), (10.7, 20.5));
        assert_eq!(bbox.to_pixels(), (1, 2, 10, 20));
    }
}
