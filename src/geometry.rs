//! 2D geometry primitives shared across the crate.

/// Clamp `num` into `[min, max]`.
///
/// Tolerant of inverted ranges (`min > max` yields `max`), which keeps
/// degenerate display boxes from panicking downstream.
pub fn clamp(num: f32, min: f32, max: f32) -> f32 {
    num.max(min).min(max)
}

/// A position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
///
/// Used both for the viewport (the bounding box the image is displayed
/// within, supplied fresh by the host on every call) and for the image's
/// natural size at scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Whether `point` lies inside the box (edges included).
    pub fn contains(&self, point: Point) -> bool {
        !(point.x < self.left
            || point.x > self.right
            || point.y < self.top
            || point.y > self.bottom)
    }

    /// Clamp `point` onto the box.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            clamp(point.x, self.left, self.right),
            clamp(point.y, self.top, self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        // max wins when the range collapses past itself
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect { left: 10.0, top: 20.0, right: 30.0, bottom: 60.0 };
        assert_eq!(rect.center(), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect { left: 0.0, top: 0.0, right: 100.0, bottom: 50.0 };
        assert!(rect.contains(Point::new(50.0, 25.0)));
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(100.0, 50.0)));
        assert!(!rect.contains(Point::new(-1.0, 25.0)));
        assert!(!rect.contains(Point::new(50.0, 51.0)));
    }

    #[test]
    fn test_rect_clamp_point() {
        let rect = Rect { left: 0.0, top: 0.0, right: 100.0, bottom: 50.0 };
        assert_eq!(
            rect.clamp_point(Point::new(150.0, -10.0)),
            Point::new(100.0, 0.0)
        );
        assert_eq!(
            rect.clamp_point(Point::new(30.0, 40.0)),
            Point::new(30.0, 40.0)
        );
    }
}
