//! Screen-space geometry for hit testing.
//!
//! All coordinates are in screen units (CSS pixels on the web). The y axis
//! grows downward, matching the canvas the cards are drawn on.
//!
//! ## Usage
//!
//! ```
//! use ccg_drop::core::{Point, Rect};
//!
//! let bounds = Rect::new(50.0, 50.0, 100.0, 100.0);
//! assert!(bounds.contains(Point::new(100.0, 100.0)));
//! assert_eq!(bounds.center(), Point::new(100.0, 100.0));
//! assert_eq!(bounds.distance_to_center(Point::new(100.0, 130.0)), 30.0);
//! ```

use serde::{Deserialize, Serialize};

/// A point in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Translate by an offset.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of the given size centered on `center`.
    #[must_use]
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Containment test. Edges count as inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Distance from `point` to the rectangle's center.
    ///
    /// This is the metric used both for magnetic attraction and for breaking
    /// priority ties, whether or not the point is inside the rectangle.
    #[must_use]
    pub fn distance_to_center(&self, point: Point) -> f32 {
        point.distance_to(self.center())
    }

    /// Non-negative, finite size and finite origin.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(40.0, 60.0)));
        assert!(rect.contains(Point::new(25.0, 35.0)));
        assert!(!rect.contains(Point::new(9.9, 35.0)));
        assert!(!rect.contains(Point::new(25.0, 60.1)));
    }

    #[test]
    fn test_center_and_distance() {
        let rect = Rect::new(100.0, 100.0, 100.0, 100.0);
        assert_eq!(rect.center(), Point::new(150.0, 150.0));

        let d = rect.distance_to_center(Point::new(130.0, 130.0));
        assert!((d - 28.284_271).abs() < 1e-4);

        let far = rect.distance_to_center(Point::new(50.0, 50.0));
        assert!((far - 141.421_36).abs() < 1e-3);
    }

    #[test]
    fn test_centered_at() {
        let rect = Rect::centered_at(Point::new(50.0, 50.0), 20.0, 10.0);
        assert_eq!(rect, Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn test_well_formed() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, -1.0, 5.0).is_well_formed());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 5.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 5.0).is_well_formed());
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(10.0, 10.0).offset(Point::new(0.0, -40.0));
        assert_eq!(p, Point::new(10.0, -30.0));
        assert_eq!(format!("{}", p), "(10, -30)");
    }
}
