//! Quickhull solvers over a mutable point buffer.
//!
//! Purpose
//! - Bisect by the lexicographic extremes `L`/`R`, refine each half by apex
//!   search and in-place partition, mark discarded points with the sentinel,
//!   then compact. Output is the hull in counter-clockwise order from `L`,
//!   without collinear or duplicate vertices.
//! - Variants: recursive (three partition strategies), iterative worklist,
//!   parallel fan-out on a rayon pool, a slice-parallel front end that
//!   splits the plane by extremal directions, and a hybrid that hands deep or
//!   small subranges to the monotone chain.
//!
//! Every solver takes `&mut Vec<Point<T>>` and replaces its contents with the
//! hull. Inputs must satisfy `geom2::validate_input`; solvers do not check.
//!
//! Code cross-refs: `geom2::Point::side_of_line`, `registry`

mod bisect;
mod compact;
mod hybrid;
pub mod parallel;
pub mod partition;
mod recursive;
pub mod slice;
mod worklist;

pub use bisect::{bisect, Halves};
pub use compact::remove_not_on_hull;
pub use hybrid::{refine_hybrid, solve_hybrid, HybridCfg};
pub use parallel::{solve_parallel, ParallelCfg, SplitMethod};
pub use partition::{find_furthest, partition_points, split_chord, PartitionStrategy, Split};
pub use recursive::{refine, solve_with};
pub use slice::{solve_slice_parallel, SliceCfg};
pub use worklist::solve_worklist;

use crate::geom2::{Coord, Point};

/// Recursive Quickhull with the default partition strategy.
#[inline]
pub fn solve<T: Coord>(points: &mut Vec<Point<T>>) {
    solve_with(points, PartitionStrategy::default());
}

#[cfg(test)]
mod tests;
