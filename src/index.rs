use std::collections::{BTreeSet, HashMap};

use crate::point::Point;

/// Exact-match point lookup, built once from the input points.
///
/// Points present multiple times in the input collapse into a single entry:
/// an index records existence, never multiplicity.
pub trait MembershipIndex: FromIterator<Point> {
    fn contains(&self, point: &Point) -> bool;

    /// Number of distinct points in the index.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|p| self.contains(p))
    }
}

/// Two hash maps, one keyed by column (`x → {y}`) and one by row
/// (`y → {x}`).
#[derive(Clone, Debug, Default)]
pub struct AxisIndex {
    columns: HashMap<isize, BTreeSet<isize>>,
    rows: HashMap<isize, BTreeSet<isize>>,
}

impl AxisIndex {
    pub fn insert(&mut self, point: Point) {
        self.columns.entry(point.x).or_default().insert(point.y);
        self.rows.entry(point.y).or_default().insert(point.x);
    }

    /// The `y` values present in column `x`.
    pub fn column(&self, x: isize) -> Option<&BTreeSet<isize>> {
        self.columns.get(&x)
    }

    /// The `x` values present in row `y`.
    pub fn row(&self, y: isize) -> Option<&BTreeSet<isize>> {
        self.rows.get(&y)
    }
}

impl MembershipIndex for AxisIndex {
    #[inline]
    fn contains(&self, point: &Point) -> bool {
        let found = self
            .column(point.x)
            .map_or(false, |ys| ys.contains(&point.y));
        debug_assert_eq!(
            found,
            self.row(point.y).map_or(false, |xs| xs.contains(&point.x))
        );
        found
    }

    fn len(&self) -> usize {
        self.columns.values().map(BTreeSet::len).sum()
    }
}

impl FromIterator<Point> for AxisIndex {
    fn from_iter<Iterable: IntoIterator<Item = Point>>(points: Iterable) -> Self {
        let mut index = Self::default();
        points.into_iter().for_each(|p| index.insert(p));
        index
    }
}

/// A single ordered set of points.
#[derive(Clone, Debug, Default)]
pub struct OrderedIndex {
    points: BTreeSet<Point>,
}

impl MembershipIndex for OrderedIndex {
    #[inline]
    fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

impl FromIterator<Point> for OrderedIndex {
    fn from_iter<Iterable: IntoIterator<Item = Point>>(points: Iterable) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(isize, isize)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn check_membership<I: MembershipIndex>() {
        let input = points(&[(0, 0), (0, 1), (1, 0), (0, 0), (-3, 7)]);
        let index: I = input.iter().copied().collect();

        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());
        for p in &input {
            assert!(index.contains(p));
        }
        assert!(!index.contains(&Point::new(1, 1)));
        assert!(!index.contains(&Point::new(7, -3)));
        assert!(index.contains_all(&points(&[(0, 1), (1, 0)])));
        assert!(!index.contains_all(&points(&[(0, 1), (1, 1)])));
    }

    #[test]
    fn axis_index_membership() {
        check_membership::<AxisIndex>();
    }

    #[test]
    fn ordered_index_membership() {
        check_membership::<OrderedIndex>();
    }

    #[test]
    fn empty_indices() {
        let axis: AxisIndex = std::iter::empty().collect();
        let ordered: OrderedIndex = std::iter::empty().collect();
        assert!(axis.is_empty());
        assert!(ordered.is_empty());
        assert!(!axis.contains(&Point::new(0, 0)));
        assert!(!ordered.contains(&Point::new(0, 0)));
    }

    #[test]
    fn axis_index_rows_and_columns() {
        let index: AxisIndex = points(&[(2, 5), (2, 9), (4, 5)]).into_iter().collect();
        assert_eq!(
            index.column(2).map(|ys| ys.iter().copied().collect::<Vec<_>>()),
            Some(vec![5, 9])
        );
        assert_eq!(
            index.row(5).map(|xs| xs.iter().copied().collect::<Vec<_>>()),
            Some(vec![2, 4])
        );
        assert!(index.column(3).is_none());
    }
}
