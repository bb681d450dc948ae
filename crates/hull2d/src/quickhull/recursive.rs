//! Sequential recursive refinement over borrow-checked subranges.

use super::bisect::bisect;
use super::partition::{split_chord, PartitionStrategy};
use super::compact::remove_not_on_hull;
use crate::geom2::{Coord, Point};

/// Keep only the hull vertices of `pts` strictly outside `left → right`,
/// in order, and overwrite the rest with the sentinel.
///
/// Preconditions: `left != right`, and no candidate equals either endpoint
/// unless it is also discarded by the side tests (duplicates are).
pub fn refine<T: Coord>(
    pts: &mut [Point<T>],
    left: Point<T>,
    right: Point<T>,
    strategy: PartitionStrategy,
) {
    let Some((apex, split)) = split_chord(pts, left, right, strategy) else {
        return;
    };
    let (right_pts, left_pts) = split.windows(pts);
    refine(right_pts, apex, right, strategy);
    refine(left_pts, left, apex, strategy);
}

/// Recursive Quickhull with the chosen partition strategy.
pub fn solve_with<T: Coord>(points: &mut Vec<Point<T>>, strategy: PartitionStrategy) {
    if points.len() <= 1 {
        return;
    }
    let Some(halves) = bisect(points) else {
        points.truncate(1);
        return;
    };
    let (below, above) = halves.windows(points);
    refine(below, halves.right, halves.left, strategy);
    refine(above, halves.left, halves.right, strategy);
    remove_not_on_hull(points);
}
