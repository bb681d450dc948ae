//! Quickhull that hands deep or small subranges to the monotone chain.
//!
//! The switch never happens at depth 0 (the two bisection halves), so the
//! default configuration is plain recursive Quickhull.

use tracing::debug;

use super::bisect::bisect;
use super::compact::remove_not_on_hull;
use super::partition::{split_chord, PartitionStrategy};
use crate::geom2::{monotone_chain, Coord, Point};

/// When the recursion switches to the monotone chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HybridCfg {
    /// Switch once this recursion depth is reached.
    pub depth: Option<usize>,
    /// Switch once at most this many candidates remain.
    pub points: usize,
    pub strategy: PartitionStrategy,
}

impl HybridCfg {
    #[inline]
    fn switches(&self, depth: usize, len: usize) -> bool {
        depth > 0 && (len <= self.points || self.depth.is_some_and(|d| depth >= d))
    }
}

/// `refine` with a cutoff; below it the chord's candidates are solved by
/// the monotone chain and written back in the same in-order layout.
pub fn refine_hybrid<T: Coord>(
    pts: &mut [Point<T>],
    left: Point<T>,
    right: Point<T>,
    depth: usize,
    cfg: &HybridCfg,
) {
    if pts.is_empty() {
        return;
    }
    if cfg.switches(depth, pts.len()) {
        chain_between(pts, left, right);
        return;
    }
    let Some((apex, split)) = split_chord(pts, left, right, cfg.strategy) else {
        return;
    };
    let (right_pts, left_pts) = split.windows(pts);
    refine_hybrid(right_pts, apex, right, depth + 1, cfg);
    refine_hybrid(left_pts, left, apex, depth + 1, cfg);
}

/// Overwrite `pts` with the hull vertices strictly left of `left → right`,
/// ordered from `right` to `left`, padded with sentinels.
fn chain_between<T: Coord>(pts: &mut [Point<T>], left: Point<T>, right: Point<T>) {
    let mut sub = Vec::with_capacity(pts.len() + 2);
    sub.push(left);
    sub.push(right);
    sub.extend_from_slice(pts);
    let mut hull = monotone_chain(&sub);
    let Some(start) = hull.iter().position(|p| *p == right) else {
        pts.fill(Point::not_on_hull());
        return;
    };
    // counter-clockwise from `right` the chain runs back to `left`
    hull.rotate_left(start);
    let end = hull.iter().position(|p| *p == left).unwrap_or(1);
    let chain = &hull[1..end];
    pts[..chain.len()].copy_from_slice(chain);
    pts[chain.len()..].fill(Point::not_on_hull());
}

/// Hybrid Quickhull: recursive refinement until `cfg` says to switch.
pub fn solve_hybrid<T: Coord>(points: &mut Vec<Point<T>>, cfg: HybridCfg) {
    if points.len() <= 1 {
        return;
    }
    let Some(halves) = bisect(points) else {
        points.truncate(1);
        return;
    };
    debug!(n = points.len(), depth = ?cfg.depth, points = cfg.points, "hybrid quickhull");
    let (below, above) = halves.windows(points);
    refine_hybrid(below, halves.right, halves.left, 0, &cfg);
    refine_hybrid(above, halves.left, halves.right, 0, &cfg);
    remove_not_on_hull(points);
}
