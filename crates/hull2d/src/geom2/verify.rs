//! Input preconditions and hull checks.
//!
//! - `validate_input`: rejects sentinel collisions and out-of-range coordinates.
//! - `check_hull`: subset, convexity, containment and minimality of a result.
//! - `normalize`, `same_vertex_set`: compare hulls produced by different solvers.
//!
//! Tolerance policy: `tol = 0` checks exactly in `T` arithmetic (use for
//! integers). `tol > 0` accepts cross products within `tol·|u|·|v|` of zero,
//! which absorbs float rounding for near-collinear points.

use super::types::{Coord, Point};
use crate::error::{HullError, Result};

/// Check the solver preconditions on raw input.
pub fn validate_input<T: Coord>(points: &[Point<T>]) -> Result<()> {
    for (index, p) in points.iter().enumerate() {
        if p.is_not_on_hull() {
            return Err(HullError::SentinelInInput { index });
        }
        if !p.is_admissible() {
            return Err(HullError::CoordinateOutOfRange {
                index,
                x: p.x.as_f64(),
                y: p.y.as_f64(),
            });
        }
    }
    Ok(())
}

/// Rotate a cyclic hull so that its lexicographic minimum comes first.
pub fn normalize<T: Coord>(hull: &mut [Point<T>]) {
    let Some((start, _)) = hull
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp_total(b))
    else {
        return;
    };
    hull.rotate_left(start);
}

/// Whether two point lists contain the same distinct points.
pub fn same_vertex_set<T: Coord>(a: &[Point<T>], b: &[Point<T>]) -> bool {
    sorted_unique(a) == sorted_unique(b)
}

/// Strictly counter-clockwise (every consecutive triple turns left).
pub fn is_convex_ccw<T: Coord>(hull: &[Point<T>]) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let (a, b, c) = (hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        (b - a).cross(c - b) > T::zero()
    })
}

/// Point-in-convex-polygon (boundary counts as inside).
pub fn contains<T: Coord>(hull: &[Point<T>], p: Point<T>, tol: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == p,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            let c = (b - a).cross(p - a);
            near_zero(c, b - a, p - a, tol)
                && (p - a).dot(b - a) >= T::zero()
                && (p - b).dot(a - b) >= T::zero()
        }
        n => (0..n).all(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % n]);
            let c = (b - a).cross(p - a);
            c >= T::zero() || near_zero(c, b - a, p - a, tol)
        }),
    }
}

/// Verify that `hull` is the minimal CCW convex hull of `input`.
pub fn check_hull<T: Coord>(input: &[Point<T>], hull: &[Point<T>], tol: f64) -> Result<()> {
    let sorted = sorted_unique(input);
    for (index, p) in hull.iter().enumerate() {
        if sorted.binary_search_by(|q| q.cmp_total(p)).is_err() {
            return Err(HullError::NotSubset { index });
        }
    }
    let n = hull.len();
    if n == 2 && hull[0] == hull[1] {
        return Err(HullError::Redundant { index: 1 });
    }
    if n >= 3 {
        for i in 0..n {
            let (a, b, c) = (hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
            let turn = (b - a).cross(c - b);
            if near_zero(turn, b - a, c - b, tol) {
                return Err(HullError::Redundant { index: (i + 1) % n });
            }
            if turn < T::zero() {
                return Err(HullError::NotConvex { index: (i + 1) % n });
            }
        }
    }
    for (index, p) in input.iter().enumerate() {
        if !contains(hull, *p, tol) {
            return Err(HullError::NotContained { index });
        }
    }
    Ok(())
}

fn sorted_unique<T: Coord>(pts: &[Point<T>]) -> Vec<Point<T>> {
    let mut v = pts.to_vec();
    v.sort_by(|a, b| a.cmp_total(b));
    v.dedup();
    v
}

#[inline]
fn near_zero<T: Coord>(c: T, u: Point<T>, v: Point<T>, tol: f64) -> bool {
    if c == T::zero() {
        return true;
    }
    if tol <= 0.0 {
        return false;
    }
    let scale = u.len2().as_f64().sqrt() * v.len2().as_f64().sqrt();
    c.as_f64().abs() <= tol * scale
}
