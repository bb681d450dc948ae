//! Planar point model, reference hull and verification helpers.
//!
//! Purpose
//! - `Point<T>` over `i64` or `f64` with the predicates every solver shares
//!   (cross product, side of line, total order, sentinel).
//! - An independent reference hull and the checks used by tests and the CLI.
//! - Seeded point-cloud generators.
//!
//! Code cross-refs: `quickhull`, `registry`

pub mod rand;
mod reference;
mod types;
mod verify;

pub use reference::{monotone_chain, solve_monotone_chain};
pub use types::{Coord, Point, Side, MAX_FLOAT_COORD, MAX_INT_COORD};
pub use verify::{check_hull, contains, is_convex_ccw, normalize, same_vertex_set, validate_input};
