use crate::foundation::core::{BezPath, Point};

/// Three integer corners, ordered left, right, then the apex (top for the base
/// triangle, bottom for inverted ones).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Triangle {
    left: Point,
    right: Point,
    apex: Point,
}

impl Triangle {
    /// Build a triangle from its ordered corners.
    pub const fn new(left: Point, right: Point, apex: Point) -> Self {
        Self { left, right, apex }
    }

    /// First corner.
    pub fn left(&self) -> Point {
        self.left
    }

    /// Second corner.
    pub fn right(&self) -> Point {
        self.right
    }

    /// Third corner: the top of the base triangle, the bottom of an inverted one.
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Corners in polygon order.
    pub fn points(&self) -> [Point; 3] {
        [self.left, self.right, self.apex]
    }

    /// Horizontal distance between the two non-apex corners.
    pub fn span(&self) -> i32 {
        self.right.x - self.left.x
    }

    /// Closed polygon outline, ready for a path rasterizer.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.left.to_kurbo());
        path.line_to(self.right.to_kurbo());
        path.line_to(self.apex.to_kurbo());
        path.close_path();
        path
    }
}

/// Upward triangle filling the square `length` x `length` from the origin.
pub fn base_triangle(length: i32) -> Triangle {
    Triangle::new(
        Point::new(0, length),
        Point::new(length, length),
        Point::new(length / 2, 0),
    )
}

/// Downward triangle whose bottom point is `(x, y)` and whose flat top edge sits
/// `length` pixels above it.
pub fn inverted_triangle(x: i32, y: i32, length: i32) -> Triangle {
    Triangle::new(
        Point::new(x - length / 2, y - length),
        Point::new(x + length / 2, y - length),
        Point::new(x, y),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/triangle.rs"]
mod tests;
