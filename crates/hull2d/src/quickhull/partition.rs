//! Apex search and in-place partition of one chord's candidates.
//!
//! Layout contract of `partition_points` on a candidate slice `pts`:
//!
//! ```text
//! [ right group | (sentinels) | apex | left group | sentinels ]
//!   0..right_len                apex   left
//! ```
//!
//! The right group is strictly outside the edge `right → apex`, the left group
//! strictly outside `apex → left`; everything else is inside the triangle
//! `(left, apex, right)` (or on its edges) and is overwritten with the
//! sentinel. The apex lands in its final in-order slot.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::geom2::{Coord, Point, Side};

/// How the non-apex candidates are classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartitionStrategy {
    /// Right-edge test over all candidates, then left-edge test over the rest.
    NoPartitionByX,
    /// Split by `x` against the apex first; each half gets one edge test.
    #[default]
    FirstPartitionByX,
    /// One scan with two moving boundaries.
    SingleScan,
}

impl PartitionStrategy {
    pub const ALL: [PartitionStrategy; 3] = [
        PartitionStrategy::NoPartitionByX,
        PartitionStrategy::FirstPartitionByX,
        PartitionStrategy::SingleScan,
    ];
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartitionStrategy::NoPartitionByX => "nxp",
            PartitionStrategy::FirstPartitionByX => "xp",
            PartitionStrategy::SingleScan => "ss",
        };
        f.write_str(s)
    }
}

impl FromStr for PartitionStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartitionStrategy::ALL
            .into_iter()
            .find(|st| st.to_string() == s)
            .ok_or_else(|| format!("unknown partition strategy: {s}"))
    }
}

/// Result of partitioning one candidate slice (indices are slice-relative).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub right_len: usize,
    pub apex: usize,
    pub left: Range<usize>,
}

impl Split {
    /// Borrow the right and left groups as disjoint windows of `pts`.
    #[inline]
    pub fn windows<'a, P>(&self, pts: &'a mut [P]) -> (&'a mut [P], &'a mut [P]) {
        let (head, tail) = pts.split_at_mut(self.apex);
        let lo = self.left.start - self.apex;
        let hi = self.left.end - self.apex;
        (&mut head[..self.right_len], &mut tail[lo..hi])
    }
}

/// Index of the candidate farthest to the left of `left → right`.
///
/// Maximises `dot(n, p − left)` with `n = (right − left)` rotated 90° CCW;
/// ties go to the larger point in the total order. `pts` must be non-empty.
pub fn find_furthest<T: Coord>(pts: &[Point<T>], left: Point<T>, right: Point<T>) -> usize {
    let normal = (right - left).rotated_90_ccw();
    let mut best = 0;
    let mut best_dot = normal.dot(pts[0] - left);
    for (i, p) in pts.iter().enumerate().skip(1) {
        let d = normal.dot(*p - left);
        let better = match d.partial_cmp(&best_dot) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => p.cmp_total(&pts[best]) == Ordering::Greater,
            _ => false,
        };
        if better {
            best = i;
            best_dot = d;
        }
    }
    best
}

/// Move the candidates satisfying `pred` to the front; returns their count.
pub(crate) fn partition_in_place<P, F>(s: &mut [P], mut pred: F) -> usize
where
    F: FnMut(&P) -> bool,
{
    let mut first = 0;
    for i in 0..s.len() {
        if pred(&s[i]) {
            s.swap(first, i);
            first += 1;
        }
    }
    first
}

/// Partition `pts` around the apex at `apex_idx` (see module docs for layout).
pub fn partition_points<T: Coord>(
    pts: &mut [Point<T>],
    left: Point<T>,
    right: Point<T>,
    apex_idx: usize,
    strategy: PartitionStrategy,
) -> Split {
    let n = pts.len();
    let apex = pts[apex_idx];
    pts.swap(apex_idx, n - 1);

    let outside_right = |p: &Point<T>| p.side_of_line(right, apex) == Side::Right;
    let outside_left = |p: &Point<T>| p.side_of_line(apex, left) == Side::Right;

    let (num_right, not_left) = match strategy {
        PartitionStrategy::SingleScan => {
            let mut num_right = 0;
            while num_right < n - 1 && outside_right(&pts[num_right]) {
                num_right += 1;
            }
            let mut not_left = n - 1;
            let mut i = num_right;
            while i < not_left {
                if outside_right(&pts[i]) {
                    pts.swap(num_right, i);
                    num_right += 1;
                    i += 1;
                } else if outside_left(&pts[i]) {
                    not_left -= 1;
                    pts.swap(not_left, i);
                } else {
                    pts[i] = Point::not_on_hull();
                    i += 1;
                }
            }
            pts.swap(not_left, n - 1);
            return Split {
                right_len: num_right,
                apex: not_left,
                left: not_left + 1..n,
            };
        }
        PartitionStrategy::FirstPartitionByX => {
            let upper = left.cmp_total(&right) == Ordering::Less;
            let right_end = partition_in_place(&mut pts[..n - 1], |p| (p.x < apex.x) ^ upper);
            let right_valid_end = partition_in_place(&mut pts[..right_end], outside_right);
            pts[right_valid_end..right_end].fill(Point::not_on_hull());
            (right_valid_end, right_end)
        }
        PartitionStrategy::NoPartitionByX => {
            let right_end = partition_in_place(&mut pts[..n - 1], outside_right);
            (right_end, right_end)
        }
    };

    pts.swap(not_left, n - 1);
    let left_begin = not_left + 1;
    let left_len = partition_in_place(&mut pts[left_begin..], outside_left);
    pts[left_begin + left_len..].fill(Point::not_on_hull());

    Split {
        right_len: num_right,
        apex: not_left,
        left: left_begin..left_begin + left_len,
    }
}

/// One refinement step on a chord's candidates.
///
/// Returns the apex and the partition layout, or `None` when the subrange is
/// resolved: empty, a single hull vertex, or entirely inside the chord (then
/// every slot has been overwritten with the sentinel).
pub fn split_chord<T: Coord>(
    pts: &mut [Point<T>],
    left: Point<T>,
    right: Point<T>,
    strategy: PartitionStrategy,
) -> Option<(Point<T>, Split)> {
    if pts.is_empty() {
        return None;
    }
    let apex_idx = find_furthest(pts, left, right);
    let apex = pts[apex_idx];
    if apex.side_of_line(left, right) != Side::Left {
        pts.fill(Point::not_on_hull());
        return None;
    }
    if pts.len() == 1 {
        return None;
    }
    Some((apex, partition_points(pts, left, right, apex_idx, strategy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    #[test]
    fn furthest_prefers_larger_point_on_ties() {
        let pts = [pi(1, 3), pi(3, 3), pi(2, 1), pi(-1, 3)];
        // chord along the x axis, normal points up
        assert_eq!(find_furthest(&pts, pi(0, 0), pi(4, 0)), 1);
        // reversed chord: normal points down
        assert_eq!(find_furthest(&pts, pi(4, 0), pi(0, 0)), 2);
    }

    #[test]
    fn every_strategy_yields_the_same_groups() {
        // chord (0,0) → (10,0), apex (5,10)
        let base = vec![
            pi(1, 4), // outside apex → left
            pi(9, 4), // outside right → apex
            pi(5, 5), // inside triangle
            pi(5, 10),
            pi(2, 1), // inside
            pi(8, 6), // outside right → apex
            pi(3, 6), // on the edge apex → left
        ];
        let (left, right) = (pi(0, 0), pi(10, 0));
        for strategy in PartitionStrategy::ALL {
            let mut pts = base.clone();
            let idx = find_furthest(&pts, left, right);
            assert_eq!(pts[idx], pi(5, 10));
            let split = partition_points(&mut pts, left, right, idx, strategy);
            assert_eq!(pts[split.apex], pi(5, 10), "{strategy}");
            let mut r: Vec<_> = pts[..split.right_len].to_vec();
            r.sort_by(|a, b| a.cmp_total(b));
            assert_eq!(r, vec![pi(8, 6), pi(9, 4)], "{strategy}");
            assert_eq!(pts[split.left.clone()].to_vec(), vec![pi(1, 4)], "{strategy}");
            let discarded = pts.iter().filter(|p| p.is_not_on_hull()).count();
            assert_eq!(discarded, 3, "{strategy}");
            assert_eq!(
                split.right_len + 1 + split.left.len() + discarded,
                base.len(),
                "{strategy}"
            );
        }
    }

    #[test]
    fn windows_are_disjoint_groups() {
        let mut pts = [pi(1, 1), pi(2, 2), pi(0, 9), pi(3, 3), pi(4, 4)];
        let split = Split {
            right_len: 2,
            apex: 2,
            left: 3..4,
        };
        let (r, l) = split.windows(&mut pts);
        assert_eq!(r, &[pi(1, 1), pi(2, 2)]);
        assert_eq!(l, &[pi(3, 3)]);
    }

    #[test]
    fn chord_with_nothing_outside_is_cleared() {
        let mut pts = [pi(2, 0), pi(3, -1), pi(7, 0)];
        assert!(split_chord(&mut pts, pi(0, 0), pi(10, 0), PartitionStrategy::default()).is_none());
        assert!(pts.iter().all(|p| p.is_not_on_hull()));
        let mut single = [pi(4, 2)];
        assert!(split_chord(&mut single, pi(0, 0), pi(10, 0), PartitionStrategy::SingleScan).is_none());
        assert_eq!(single, [pi(4, 2)]);
    }

    #[test]
    fn strategy_names_roundtrip() {
        for s in PartitionStrategy::ALL {
            assert_eq!(s.to_string().parse::<PartitionStrategy>().unwrap(), s);
        }
        assert!("zz".parse::<PartitionStrategy>().is_err());
    }
}
