//! Screen-space geometry shared by the pointer-driven effects.

use std::ops::{Add, Mul, Sub};

/// A position in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A displacement in pixels, e.g. the translation applied to a magnetic button
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the displacement
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// CSS `transform` value for this displacement
    pub fn to_translate(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f64) -> Offset {
        Offset::new(self.x * rhs, self.y * rhs)
    }
}

/// Bounding box of an element, as reported by `getBoundingClientRect()`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Convert a client position into coordinates relative to the top-left corner
    pub fn local(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(100.0, 50.0, 200.0, 40.0);
        assert_eq!(rect.center(), Point::new(200.0, 70.0));
    }

    #[test]
    fn test_rect_local() {
        let rect = Rect::new(20.0, 30.0, 100.0, 100.0);
        assert_eq!(rect.local(Point::new(25.0, 40.0)), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_point_difference_is_offset() {
        let offset = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(offset, Offset::new(3.0, 4.0));
        assert_eq!(offset.length(), 5.0);
    }

    #[test]
    fn test_offset_to_translate() {
        assert_eq!(
            Offset::new(1.5, -2.0).to_translate(),
            "translate3d(1.5px, -2px, 0)"
        );
    }
}
