//! Primitive geometry: integer pixel points and image extents.

use serde::{Deserialize, Serialize};

/// A 2D point in image coordinates (pixels, origin top-left).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point2 {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for [i32; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

/// Image extent in pixels, captured at image-load time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `p` lies on the canvas (negative coordinates are outside).
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_rejects_negative_and_past_edge() {
        let dims = Dimensions::new(4, 3);
        assert!(dims.contains(Point2::new(0, 0)));
        assert!(dims.contains(Point2::new(3, 2)));
        assert!(!dims.contains(Point2::new(4, 2)));
        assert!(!dims.contains(Point2::new(3, 3)));
        assert!(!dims.contains(Point2::new(-1, 0)));
    }

    #[test]
    fn point_array_conversions() {
        let p = Point2::from([7, -2]);
        assert_eq!(p, Point2::new(7, -2));
        assert_eq!(<[i32; 2]>::from(p), [7, -2]);
    }
}
