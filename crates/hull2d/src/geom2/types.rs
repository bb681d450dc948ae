//! Basic 2D point model shared by every hull solver.
//!
//! - `Coord`: numeric bound for coordinates (`i64` and `f64`), with the
//!   reserved sentinel value and a total order.
//! - `Point`: plain `(x, y)` pair with vector ops, cross/dot products and the
//!   side-of-line predicate used by all partition steps.
//! - `Side`: result of the side-of-line test.
//!
//! Code cross-refs: `quickhull::partition`, `reference::monotone_chain`

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use nalgebra::Vector2;
use num_traits::{Signed, ToPrimitive};

/// Largest admissible integer coordinate magnitude.
///
/// With `|c| <= 2^30 - 1`, differences stay below `2^31`, products below
/// `2^62`, and every cross/dot sum of two products fits in `i64`.
pub const MAX_INT_COORD: i64 = (1 << 30) - 1;

/// Largest admissible float coordinate magnitude.
///
/// Keeps every cross/dot sum (at most `8·c²`) and the `|u|·|v|` tolerance
/// scale of `check_hull` finite.
pub const MAX_FLOAT_COORD: f64 = 1e150;

/// Coordinate type of a [`Point`].
///
/// The sentinel must never appear in real input; `is_admissible` encodes the
/// input precondition (finite floats, bounded integers).
pub trait Coord: Copy + Debug + PartialOrd + Signed + ToPrimitive + Send + Sync + 'static {
    /// Reserved "not on hull" coordinate.
    const SENTINEL: Self;

    fn is_sentinel(self) -> bool;

    /// Total order used for extremal-point selection and apex tie-breaks.
    fn cmp_total(&self, other: &Self) -> Ordering;

    /// Whether the value may appear as an input coordinate.
    fn is_admissible(self) -> bool;

    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Coord for i64 {
    const SENTINEL: Self = i64::MAX;

    #[inline]
    fn is_sentinel(self) -> bool {
        self == i64::MAX
    }
    #[inline]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    #[inline]
    fn is_admissible(self) -> bool {
        self.unsigned_abs() <= MAX_INT_COORD as u64
    }
}

impl Coord for f64 {
    const SENTINEL: Self = f64::NAN;

    #[inline]
    fn is_sentinel(self) -> bool {
        self.is_nan()
    }
    #[inline]
    fn cmp_total(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
    #[inline]
    fn is_admissible(self) -> bool {
        self.is_finite() && self.abs() <= MAX_FLOAT_COORD
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Side of a directed line `start → end` on which a point lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// A point (or vector) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, o: Self) -> T {
        self.x * o.x + self.y * o.y
    }

    /// 2D cross product (signed parallelogram area).
    #[inline]
    pub fn cross(self, b: Self) -> T {
        self.x * b.y - self.y * b.x
    }

    /// `(self − o) × (b − o)`.
    #[inline]
    pub fn cross_about(self, b: Self, o: Self) -> T {
        (self - o).cross(b - o)
    }

    #[inline]
    pub fn len2(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn rotated_90_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Exact side-of-line test (no tolerance).
    #[inline]
    pub fn side_of_line(self, start: Self, end: Self) -> Side {
        let c = self.cross_about(end, start);
        if c > T::zero() {
            Side::Right
        } else if c < T::zero() {
            Side::Left
        } else {
            Side::On
        }
    }

    /// Side-of-line test treating `|cross| <= eps` as collinear.
    ///
    /// The cross product is compared in `f64`; `eps = 0` matches
    /// `side_of_line` as long as the product converts without overflow.
    #[inline]
    pub fn side_of_line_eps(self, start: Self, end: Self, eps: f64) -> Side {
        let c = self.cross_about(end, start).as_f64();
        if c > eps {
            Side::Right
        } else if c < -eps {
            Side::Left
        } else {
            Side::On
        }
    }

    /// The reserved "not on hull" marker.
    #[inline]
    pub fn not_on_hull() -> Self {
        Self::new(T::SENTINEL, T::SENTINEL)
    }

    #[inline]
    pub fn is_not_on_hull(self) -> bool {
        self.x.is_sentinel()
    }

    /// Lexicographic total order (x, then y).
    #[inline]
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        self.x
            .cmp_total(&other.x)
            .then_with(|| self.y.cmp_total(&other.y))
    }

    #[inline]
    pub fn is_admissible(self) -> bool {
        self.x.is_admissible() && self.y.is_admissible()
    }
}

impl<T: Coord> Add for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y)
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
}

impl<T: Coord> Mul<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl From<Vector2<f64>> for Point<f64> {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Point<f64> {
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Point<i64>> for Point<f64> {
    #[inline]
    fn from(p: Point<i64>) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}
