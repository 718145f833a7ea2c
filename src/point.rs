use std::cmp::Ordering;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    #[inline]
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// The two points that close the rectangle spanned by `self` and `other`
    /// as a diagonal: `(self.x, other.y)` and `(other.x, self.y)`.
    ///
    /// Returns `None` if the points share an `x` or a `y`, since such a
    /// diagonal would span a degenerate rectangle.
    #[inline]
    pub fn opposite_corners(&self, other: &Point) -> Option<(Point, Point)> {
        if self.x == other.x || self.y == other.y {
            None
        } else {
            Some((Point::new(self.x, other.y), Point::new(other.x, self.y)))
        }
    }
}

impl From<(isize, isize)> for Point {
    #[inline]
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Scanline order: bottom to top, then left to right.
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_y_then_x() {
        let mut points: Vec<Point> = [(2, 1), (0, 1), (5, 0), (1, 1)]
            .into_iter()
            .map(Point::from)
            .collect();
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(5, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn opposite_corners_of_diagonal() {
        let p = Point::new(0, 0);
        let q = Point::new(3, 2);
        assert_eq!(
            p.opposite_corners(&q),
            Some((Point::new(0, 2), Point::new(3, 0)))
        );
        assert_eq!(
            q.opposite_corners(&p),
            Some((Point::new(3, 0), Point::new(0, 2)))
        );
    }

    #[test]
    fn aligned_points_have_no_opposite_corners() {
        let p = Point::new(1, 1);
        assert_eq!(p.opposite_corners(&Point::new(1, 7)), None);
        assert_eq!(p.opposite_corners(&Point::new(-4, 1)), None);
        assert_eq!(p.opposite_corners(&p), None);
    }
}
