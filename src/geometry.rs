//! Pixel geometry shared by the drag controller and window sizing.

use std::ops::{Add, Sub};

/// A point in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round toolkit (floating point) coordinates to whole pixels
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Scale each dimension by a fraction, rounding to whole pixels
    pub fn scaled(self, width_fraction: f64, height_fraction: f64) -> Size {
        Size::new(
            (self.width as f64 * width_fraction).round() as i32,
            (self.height as f64 * height_fraction).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(130, 115);
        let b = Point::new(100, 100);
        assert_eq!(a - b, Point::new(30, 15));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn test_from_f64_rounds() {
        assert_eq!(Point::from_f64(10.4, -2.6), Point::new(10, -3));
    }

    #[test]
    fn test_from_f64_start_plus_offset_rounds() {
        // Drag updates report a start point plus a fractional offset
        let (x, y, dx, dy) = (10.0, 10.0, -0.6, 2.7);
        assert_eq!(Point::from_f64(x + dx, y + dy), Point::new(9, 13));
        assert_eq!(
            Point::from_f64(x + dx, y + dy) - Point::from_f64(x, y),
            Point::new(-1, 3)
        );
    }

    #[test]
    fn test_size_scaled_rounds() {
        let screen = Size::new(1920, 1080);
        assert_eq!(screen.scaled(0.35, 0.40), Size::new(672, 432));
    }
}
