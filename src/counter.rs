use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::index::{AxisIndex, MembershipIndex, OrderedIndex};
use crate::info_label;
use crate::point::Point;
use crate::rect::Rect;

/// Which [`MembershipIndex`] backs a count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexKind {
    /// [`AxisIndex`]: hashed rows and columns.
    #[default]
    Axis,
    /// [`OrderedIndex`]: one ordered set of points.
    Ordered,
}

impl Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Axis => f.write_str("axis"),
            IndexKind::Ordered => f.write_str("ordered"),
        }
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "axis" => Ok(IndexKind::Axis),
            "ordered" => Ok(IndexKind::Ordered),
            other => Err(format!("unknown index kind: {other}")),
        }
    }
}

/// Counts the axis-aligned rectangles whose four corners are all among a
/// set of points.
///
/// Every unordered pair of distinct points is tried as a rectangle diagonal;
/// the pair closes a rectangle when both opposite corners are in the index.
/// A rectangle has two diagonals, so the number of closing pairs is twice
/// the number of rectangles.
///
/// The input is deduplicated before pairs are enumerated: a point given
/// several times is one corner, and cannot make a rectangle count more than
/// once.
#[derive(Clone, Debug)]
pub struct RectangleCounter<I: MembershipIndex> {
    index: I,
    /// Distinct input points, in order of first occurrence.
    points: Vec<Point>,
}

impl<I: MembershipIndex> RectangleCounter<I> {
    pub fn new(points: &[Point]) -> Self {
        let index: I = points.iter().copied().collect();
        let points: Vec<Point> = points.iter().copied().unique().collect();
        debug_assert_eq!(index.len(), points.len());
        Self { index, points }
    }

    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Number of distinct points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pairs of points that form a diagonal of some rectangle in the set.
    fn diagonals(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .copied()
            .tuple_combinations()
            .filter(move |(p, q)| {
                p.opposite_corners(q).map_or(false, |(a, b)| {
                    self.index.contains_all(&[a, b])
                })
            })
    }

    #[tracing::instrument(level = "debug", skip_all, fields(points = self.len()))]
    pub fn count(&self) -> u64 {
        let hits = self
            .diagonals()
            .inspect(|&(p, q)| {
                if let Some(rect) = Rect::from_diagonal(p, q) {
                    trace!(
                        "{} {:?} -- {:?} closes {:?}",
                        info_label!("diagonal"),
                        p,
                        q,
                        rect.corners()
                    )
                }
            })
            .count() as u64;
        debug_assert_eq!(hits % 2, 0, "every rectangle has two diagonals");
        let count = hits / 2;
        debug!(hits, count, "{}", info_label!("counted"));
        count
    }

    /// The distinct rectangles in the set, each reported once.
    ///
    /// Unlike [`Self::count`], this materializes every rectangle.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.diagonals()
            // Keep only the lower-left/upper-right diagonal.
            .filter(|(p, q)| (p.x < q.x) == (p.y < q.y))
            .filter_map(|(p, q)| Rect::from_diagonal(p, q))
    }
}

/// Counts rectangles using the hash-based [`AxisIndex`].
pub fn count_rectangles(points: &[Point]) -> u64 {
    RectangleCounter::<AxisIndex>::new(points).count()
}

/// Counts rectangles using the ordered [`OrderedIndex`].
pub fn count_rectangles_ordered(points: &[Point]) -> u64 {
    RectangleCounter::<OrderedIndex>::new(points).count()
}

/// Counts rectangles using the index named by `kind`.
pub fn count_rectangles_with(kind: IndexKind, points: &[Point]) -> u64 {
    match kind {
        IndexKind::Axis => count_rectangles(points),
        IndexKind::Ordered => count_rectangles_ordered(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(isize, isize)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn grid(width: isize, height: isize) -> Vec<Point> {
        (0..width)
            .cartesian_product(0..height)
            .map(Point::from)
            .collect()
    }

    fn both(points: &[Point]) -> u64 {
        let axis = count_rectangles(points);
        assert_eq!(axis, count_rectangles_ordered(points));
        axis
    }

    #[test]
    fn empty_input() {
        assert_eq!(both(&[]), 0);
    }

    #[test]
    fn single_point() {
        assert_eq!(both(&points(&[(3, 3)])), 0);
    }

    #[test]
    fn unit_square() {
        assert_eq!(both(&points(&[(0, 0), (0, 1), (1, 0), (1, 1)])), 1);
    }

    #[test]
    fn l_shape() {
        assert_eq!(both(&points(&[(0, 0), (0, 1), (1, 0)])), 0);
    }

    #[test]
    fn unrelated_point() {
        assert_eq!(both(&points(&[(0, 0), (0, 1), (1, 0), (1, 1), (5, 5)])), 1);
    }

    #[test]
    fn full_grids() {
        assert_eq!(both(&grid(3, 3)), 9);
        // C(4, 2) * C(3, 2)
        assert_eq!(both(&grid(4, 3)), 18);
        assert_eq!(both(&grid(1, 5)), 0);
    }

    #[test]
    fn collinear_points() {
        assert_eq!(both(&points(&[(0, 0), (1, 0), (2, 0), (3, 0)])), 0);
        assert_eq!(both(&points(&[(0, 0), (1, 1), (2, 2), (3, 3)])), 0);
    }

    #[test]
    fn tilted_square_is_not_counted() {
        assert_eq!(both(&points(&[(1, 0), (2, 1), (1, 2), (0, 1)])), 0);
    }

    #[test]
    fn negative_and_extreme_coordinates() {
        let square = points(&[
            (isize::MIN, isize::MIN),
            (isize::MIN, isize::MAX),
            (isize::MAX, isize::MIN),
            (isize::MAX, isize::MAX),
            (-1, -1),
        ]);
        assert_eq!(both(&square), 1);
    }

    #[test]
    fn duplicates_do_not_change_count() {
        let square = points(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let mut doubled = square.clone();
        doubled.extend_from_slice(&square);
        assert_eq!(both(&doubled), 1);

        let mut grid = grid(3, 3);
        grid.push(Point::new(1, 1));
        grid.push(Point::new(0, 2));
        grid.push(Point::new(0, 2));
        assert_eq!(both(&grid), 9);
    }

    #[test]
    fn counter_reports_distinct_points() {
        let counter = RectangleCounter::<AxisIndex>::new(&points(&[
            (0, 0),
            (0, 0),
            (1, 1),
        ]));
        assert_eq!(counter.len(), 2);
        assert!(!counter.is_empty());
        assert_eq!(counter.index().len(), 2);
    }

    #[test]
    fn rects_lists_each_rectangle_once() {
        let counter = RectangleCounter::<OrderedIndex>::new(&grid(3, 2));
        let rects: Vec<Rect> = counter.rects().sorted().collect();
        let expected: Vec<Rect> = [((0, 0), (1, 1)), ((0, 0), (2, 1)), ((1, 0), (2, 1))]
            .into_iter()
            .filter_map(|(p, q)| Rect::from_diagonal(p.into(), q.into()))
            .collect();
        assert_eq!(rects, expected);
        assert_eq!(rects.len() as u64, counter.count());
    }

    #[test]
    fn index_kind_dispatch() {
        let square = points(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(count_rectangles_with(IndexKind::Axis, &square), 1);
        assert_eq!(count_rectangles_with(IndexKind::Ordered, &square), 1);
        assert_eq!("ordered".parse::<IndexKind>(), Ok(IndexKind::Ordered));
        assert_eq!(IndexKind::Axis.to_string(), "axis");
        assert!("btree".parse::<IndexKind>().is_err());
    }
}
