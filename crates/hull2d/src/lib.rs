//! Planar convex hulls with the Quickhull family.
//!
//! Layout
//! - `geom2`: point model, side-of-line predicate, reference hull, checks and
//!   point-cloud generators.
//! - `quickhull`: the in-place solvers (recursive, worklist, parallel,
//!   slice-parallel, hybrid) sharing one bisect / apex / partition / compact
//!   pipeline.
//! - `registry`: solver table addressed by name, used by the CLI and benches.
//!
//! Every solver rewrites a `Vec<Point<T>>` into its hull: counter-clockwise,
//! starting at the lexicographically smallest point, with no duplicate or
//! collinear vertices. `T` is `i64` (exact, `|c| <= MAX_INT_COORD`) or `f64`
//! (finite, `|c| <= MAX_FLOAT_COORD`).

pub mod error;
pub mod geom2;
pub mod quickhull;
pub mod registry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use geom2::{validate_input, Coord, Point, Side, MAX_FLOAT_COORD, MAX_INT_COORD};
pub use nalgebra::Vector2 as Vec2;
pub use quickhull::{
    solve, solve_hybrid, solve_parallel, solve_slice_parallel, solve_with, solve_worklist,
    HybridCfg, ParallelCfg, PartitionStrategy, SliceCfg, SplitMethod,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, draw_cloud_int, Cloud, CloudCfg, ReplayToken};
    pub use crate::geom2::{check_hull, monotone_chain, normalize, validate_input, Coord, Point, Side};
    pub use crate::quickhull::{
        solve, solve_hybrid, solve_parallel, solve_slice_parallel, solve_with, solve_worklist,
        HybridCfg, ParallelCfg, PartitionStrategy, SliceCfg, SplitMethod,
    };
    pub use crate::registry::{HullImpl, ImplArgs, ImplSpec};
    pub use nalgebra::Vector2 as Vec2;
}

/// Hull of `nalgebra` vectors with the default solver.
///
/// Non-finite or out-of-range input points are dropped first.
pub fn hull_of_vectors(points: &[Vec2<f64>]) -> Vec<Vec2<f64>> {
    let mut pts: Vec<Point<f64>> = points
        .iter()
        .map(|&v| Point::from(v))
        .filter(|p| p.is_admissible())
        .collect();
    solve(&mut pts);
    pts.into_iter().map(Point::to_vector).collect()
}
