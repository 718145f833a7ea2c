use crate::point::Point;

/// An axis-aligned rectangle, stored as its lower-left and upper-right
/// corners. Two rects are equal iff their corner quadruples are equal.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    left: Point,
    right: Point,
}

impl Rect {
    pub fn new(left: Point, right: Point) -> Self {
        debug_assert!(left.x < right.x && left.y < right.y);
        Self { left, right }
    }

    /// Normalizes either diagonal of a rectangle into its lower-left and
    /// upper-right corners.
    pub fn from_diagonal(p: Point, q: Point) -> Option<Self> {
        p.opposite_corners(&q)?;
        Some(Self::new(
            Point::new(p.x.min(q.x), p.y.min(q.y)),
            Point::new(p.x.max(q.x), p.y.max(q.y)),
        ))
    }

    #[inline]
    pub fn left(&self) -> Point {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Corners in scanline order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.left,
            Point::new(self.right.x, self.left.y),
            Point::new(self.left.x, self.right.y),
            self.right,
        ]
    }
}
