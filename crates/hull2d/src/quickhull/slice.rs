//! Slice-parallel front end.
//!
//! Pick `k` directions evenly spaced in angle, take the extreme input point in
//! each, add the exact lexicographic extremes, and solve every arc between two
//! consecutive extremes independently:
//! the points strictly right of the chord `R_i → R_{i+1}` plus both endpoints.
//! Each sub-hull is rotated to start at `R_i`, its trailing `R_{i+1}` dropped,
//! and the arcs are concatenated in direction order, then rotated to the
//! lexicographic minimum and pruned of straight vertices.

use std::cmp::Ordering;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use super::bisect::{argmax, argmin};
use super::parallel::resolve_threads;
use crate::geom2::{normalize, Coord, Point, Side};

/// Slice-parallel configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceCfg {
    /// Number of directions and workers; `None` uses the available parallelism.
    /// At least two directions are always used.
    pub threads: Option<usize>,
    /// Points whose cross product with a chord is at most `eps` are treated
    /// as inside. Zero keeps the exact test.
    pub eps: f64,
}

impl Default for SliceCfg {
    fn default() -> Self {
        Self {
            threads: None,
            eps: 0.0,
        }
    }
}

/// Extreme point in direction `(dx, dy)`; ties go to the larger point.
fn extreme_in<T: Coord>(points: &[Point<T>], dx: f64, dy: f64) -> Point<T> {
    let key = |p: &Point<T>| dx * p.x.as_f64() + dy * p.y.as_f64();
    let mut best = points[0];
    let mut best_dot = key(&best);
    for p in &points[1..] {
        let d = key(p);
        let better = match d.partial_cmp(&best_dot) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => p.cmp_total(&best) == Ordering::Greater,
            _ => false,
        };
        if better {
            best = *p;
            best_dot = d;
        }
    }
    best
}

/// Distinct direction extremes in counter-clockwise order.
///
/// Rounded keys can tie along an edge and pick a point in its middle, so the
/// lexicographic minimum and maximum are always included: the minimum is the
/// extreme just after angle `-π`, the maximum just after angle `0`. If all
/// extremes lie on one line, only those two are kept.
pub(crate) fn direction_extremes<T: Coord>(points: &[Point<T>], k: usize) -> Vec<Point<T>> {
    let lo = points[argmin(points)];
    let hi = points[argmax(points)];
    let mut ext: Vec<Point<T>> = Vec::with_capacity(k + 2);
    for i in 0..k {
        let angle = std::f64::consts::TAU * i as f64 / k as f64 - std::f64::consts::PI;
        ext.push(extreme_in(points, angle.cos(), angle.sin()));
        if i == 0 {
            ext.push(lo);
        }
        if i == k / 2 {
            ext.push(hi);
        }
    }
    ext.dedup();
    while ext.len() > 1 && ext.first() == ext.last() {
        ext.pop();
    }
    if ext.len() > 2 && ext.iter().all(|p| p.side_of_line(lo, hi) == Side::On) {
        return vec![lo, hi];
    }
    ext
}

/// Hull of the arc from `a` to `b`, without `b`.
fn solve_arc<T, F>(points: &[Point<T>], a: Point<T>, b: Point<T>, eps: f64, inner: &F) -> Vec<Point<T>>
where
    T: Coord,
    F: Fn(&mut Vec<Point<T>>),
{
    let mut sub = vec![a, b];
    sub.extend(
        points
            .iter()
            .filter(|p| p.side_of_line_eps(a, b, eps) == Side::Right)
            .copied(),
    );
    inner(&mut sub);
    if let Some(start) = sub.iter().position(|p| *p == a) {
        sub.rotate_left(start);
    }
    if sub.last() == Some(&b) {
        sub.pop();
    }
    sub
}

/// Slice-parallel hull with `inner` solving each arc.
///
/// Falls back to `inner` on the whole input when fewer than two distinct
/// extremes exist or no pool can be built. Output starts at the lexicographic
/// minimum like every other solver.
pub fn solve_slice_parallel<T, F>(points: &mut Vec<Point<T>>, cfg: SliceCfg, inner: F)
where
    T: Coord,
    F: Fn(&mut Vec<Point<T>>) + Sync,
{
    if points.len() <= 1 {
        return;
    }
    let k = resolve_threads(cfg.threads).max(2);
    let extremes = direction_extremes(points, k);
    if extremes.len() < 2 {
        debug!(n = points.len(), "fewer than two extremes; solving whole input");
        inner(points);
        return;
    }
    let pool = match ThreadPoolBuilder::new().num_threads(k).build() {
        Ok(pool) => pool,
        Err(err) => {
            warn!(%err, k, "thread pool unavailable; solving whole input");
            inner(points);
            return;
        }
    };
    debug!(n = points.len(), k, slices = extremes.len(), "slice-parallel quickhull");

    let input: &[Point<T>] = points;
    let arcs: Vec<Vec<Point<T>>> = pool.install(|| {
        (0..extremes.len())
            .into_par_iter()
            .map(|i| {
                let (a, b) = (extremes[i], extremes[(i + 1) % extremes.len()]);
                solve_arc(input, a, b, cfg.eps, &inner)
            })
            .collect()
    });
    let hull: Vec<Point<T>> = arcs.into_iter().flatten().collect();
    *points = hull;
    normalize(points);
    prune_straight(points);
}

/// Drop vertices that do not turn left.
///
/// Extremes are picked with `f64` keys, so rounding can pick a point in the
/// middle of a hull edge as an arc endpoint. `hull` must start at a true
/// vertex (the lexicographic minimum).
fn prune_straight<T: Coord>(hull: &mut Vec<Point<T>>) {
    if hull.len() < 3 {
        return;
    }
    let turn = |a: Point<T>, b: Point<T>, c: Point<T>| (b - a).cross(c - a);
    let mut out: Vec<Point<T>> = Vec::with_capacity(hull.len());
    for &p in hull.iter() {
        while out.len() >= 2 && turn(out[out.len() - 2], out[out.len() - 1], p) <= T::zero() {
            out.pop();
        }
        out.push(p);
    }
    while out.len() >= 3 && turn(out[out.len() - 2], out[out.len() - 1], out[0]) <= T::zero() {
        out.pop();
    }
    *hull = out;
}
