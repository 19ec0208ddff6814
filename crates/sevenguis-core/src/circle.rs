//! Circle shape used by the circle drawer.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Identifier of a circle, unique within a store.
pub type CircleId = u64;

/// Radius given to newly created circles.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// A circle on the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: CircleId,
    /// Center point.
    pub center: Point,
    /// Radius, always positive.
    pub radius: f64,
    /// Whether this circle is the current selection.
    #[serde(default)]
    pub selected: bool,
}

impl Circle {
    /// Create an unselected circle.
    pub(crate) fn new(id: CircleId, center: Point, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            selected: false,
        }
    }

    /// Get the identifier.
    pub fn id(&self) -> CircleId {
        self.id
    }

    /// Check if a point lies inside the circle or on its boundary.
    ///
    /// Compares squared distances, so no square root is taken.
    pub fn contains(&self, point: Point) -> bool {
        let delta = point - self.center;
        delta.hypot2() <= self.radius * self.radius
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_center() {
        let circle = Circle::new(1, Point::new(50.0, 50.0), 10.0);
        assert!(circle.contains(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let circle = Circle::new(1, Point::new(0.0, 0.0), 10.0);
        assert!(circle.contains(Point::new(10.0, 0.0)));
        assert!(circle.contains(Point::new(6.0, 8.0)));
        assert!(!circle.contains(Point::new(10.0, 0.1)));
        assert!(!circle.contains(Point::new(15.0, 0.0)));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(1, Point::new(50.0, 40.0), 20.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 70.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_shape() {
        let circle = Circle::new(3, Point::new(1.0, 2.0), 10.0);
        let json = serde_json::to_value(&circle).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["radius"], 10.0);
        assert_eq!(json["selected"], false);
    }
}
