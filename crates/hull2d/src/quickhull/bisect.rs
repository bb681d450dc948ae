//! Extremal bisection: the entry step shared by every Quickhull solver.

use std::ops::Range;

use super::partition::partition_in_place;
use crate::geom2::{Coord, Point, Side};

/// The two half-hull subproblems after bisection.
///
/// Buffer layout: `[L | below | R | above]`. The lower half uses the chord
/// `(R, L)`, the upper half `(L, R)`; collinear points belong to the upper half.
#[derive(Clone, Debug)]
pub struct Halves<T> {
    pub left: Point<T>,
    pub right: Point<T>,
    pub below: Range<usize>,
    pub above: Range<usize>,
}

impl<T: Coord> Halves<T> {
    /// Borrow the lower and upper candidate windows.
    #[inline]
    pub fn windows<'a>(&self, pts: &'a mut [Point<T>]) -> (&'a mut [Point<T>], &'a mut [Point<T>]) {
        let (head, tail) = pts.split_at_mut(self.below.end);
        (&mut head[self.below.clone()], &mut tail[1..])
    }
}

/// Bisect `pts` (at least two points) by its lexicographic extremes.
///
/// Returns `None` when every point is identical; `pts` is then untouched
/// apart from reordering.
pub fn bisect<T: Coord>(pts: &mut [Point<T>]) -> Option<Halves<T>> {
    let n = pts.len();
    debug_assert!(n >= 2, "bisect needs at least two points");
    let lo = argmin(pts);
    pts.swap(0, lo);
    let hi = argmax(pts);
    pts.swap(n - 1, hi);
    let (left, right) = (pts[0], pts[n - 1]);
    if left == right {
        return None;
    }
    let num_below = partition_in_place(&mut pts[1..n - 1], |p| {
        p.side_of_line(left, right) == Side::Right
    });
    let below_end = 1 + num_below;
    pts.swap(n - 1, below_end);
    Some(Halves {
        left,
        right,
        below: 1..below_end,
        above: below_end + 1..n,
    })
}

pub(crate) fn argmin<T: Coord>(pts: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if p.cmp_total(&pts[best]).is_lt() {
            best = i;
        }
    }
    best
}

pub(crate) fn argmax<T: Coord>(pts: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if p.cmp_total(&pts[best]).is_gt() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    #[test]
    fn splits_below_and_above() {
        let mut pts = vec![pi(2, -1), pi(5, 0), pi(1, 3), pi(0, 0), pi(3, 0), pi(4, -2)];
        let h = bisect(&mut pts).unwrap();
        assert_eq!(h.left, pi(0, 0));
        assert_eq!(h.right, pi(5, 0));
        assert_eq!(pts[0], pi(0, 0));
        assert_eq!(pts[h.below.end], pi(5, 0));
        let mut below = pts[h.below.clone()].to_vec();
        below.sort_by(|a, b| a.cmp_total(b));
        assert_eq!(below, vec![pi(2, -1), pi(4, -2)]);
        // collinear (3,0) goes above
        let mut above = pts[h.above.clone()].to_vec();
        above.sort_by(|a, b| a.cmp_total(b));
        assert_eq!(above, vec![pi(1, 3), pi(3, 0)]);
        let (b, a) = h.windows(&mut pts);
        assert_eq!((b.len(), a.len()), (2, 2));
    }

    #[test]
    fn two_points_and_identical_points() {
        let mut two = vec![pi(3, 1), pi(-1, 7)];
        let h = bisect(&mut two).unwrap();
        assert_eq!(two, vec![pi(-1, 7), pi(3, 1)]);
        assert!(h.below.is_empty() && h.above.is_empty());
        let mut same = vec![pi(2, 2); 5];
        assert!(bisect(&mut same).is_none());
    }
}
