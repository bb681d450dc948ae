//! Reference hull: Andrew's monotone chain.
//!
//! Purpose
//! - Independent oracle for the Quickhull family (tests, `--verify` in the CLI)
//!   and the `mc` registry entry.
//! - Same output contract as the Quickhull solvers: counter-clockwise, no
//!   collinear or duplicate vertices, starting at the lexicographic minimum.

use super::types::{Coord, Point};

/// Monotone chain convex hull (CCW, strict).
pub fn monotone_chain<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.cmp_total(b));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point<T>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= T::zero() {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point<T>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= T::zero() {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// In-place variant matching the `solve` signature.
pub fn solve_monotone_chain<T: Coord>(points: &mut Vec<Point<T>>) {
    *points = monotone_chain(points);
}

#[inline]
fn turn<T: Coord>(a: Point<T>, b: Point<T>, c: Point<T>) -> T {
    (b - a).cross(c - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    #[test]
    fn square_with_interior_point() {
        let pts = vec![pi(0, 0), pi(4, 0), pi(4, 4), pi(0, 4), pi(2, 2)];
        assert_eq!(
            monotone_chain(&pts),
            vec![pi(0, 0), pi(4, 0), pi(4, 4), pi(0, 4)]
        );
    }

    #[test]
    fn collinear_and_duplicates() {
        let pts = vec![pi(2, 2), pi(0, 0), pi(1, 1), pi(2, 2), pi(0, 0)];
        assert_eq!(monotone_chain(&pts), vec![pi(0, 0), pi(2, 2)]);
        assert_eq!(monotone_chain(&[pi(3, 3), pi(3, 3)]), vec![pi(3, 3)]);
        assert!(monotone_chain::<i64>(&[]).is_empty());
    }
}
