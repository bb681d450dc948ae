//! Error types for input validation and hull verification.
//!
//! The solvers themselves are infallible; these errors come from checking
//! caller preconditions (`validate_input`), from `check_hull`, and from
//! resolving implementation names in the registry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Coordinate is not finite, exceeds `MAX_FLOAT_COORD` (f64) or exceeds
    /// `MAX_INT_COORD` (i64).
    #[error("coordinate out of range at input index {index}: ({x}, {y})")]
    CoordinateOutOfRange { index: usize, x: f64, y: f64 },

    #[error("input point {index} collides with the not-on-hull sentinel")]
    SentinelInInput { index: usize },

    #[error("hull vertex {index} is not an input point")]
    NotSubset { index: usize },

    #[error("hull turns clockwise at vertex {index}")]
    NotConvex { index: usize },

    #[error("input point {index} lies outside the hull")]
    NotContained { index: usize },

    /// Duplicate or collinear vertex that a minimal hull would drop.
    #[error("hull vertex {index} is redundant")]
    Redundant { index: usize },

    #[error("unknown implementation: {name}")]
    UnknownImplementation { name: String },

    #[error("{name} has no {coord} version")]
    UnsupportedCoord { name: String, coord: &'static str },

    #[error("invalid implementation argument: {arg}")]
    InvalidArgument { arg: String },
}

pub type Result<T> = std::result::Result<T, HullError>;
