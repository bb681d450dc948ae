//! Text point format shared by `run` and `gen`.
//!
//! ```text
//! 2            <- dimension, rest of the line ignored
//! <n>
//! <x> <y>      <- n lines (any whitespace works)
//! ```
//!
//! Hull output drops the dimension line: `<count>` then one `x y` per vertex.

use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use hull2d::{Coord, Point};

/// Parse the input format into points.
pub fn parse_points<T>(text: &str) -> Result<Vec<Point<T>>>
where
    T: Coord + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let dim = first
        .split_whitespace()
        .next()
        .context("missing dimension line")?;
    let dim: usize = dim.parse().with_context(|| format!("bad dimension {dim:?}"))?;
    if dim != 2 {
        bail!("dimension must be 2, got {dim}");
    }

    let mut tokens = rest.split_whitespace();
    let n = tokens.next().context("missing point count")?;
    let n: usize = n.parse().with_context(|| format!("bad point count {n:?}"))?;
    let mut next_coord = |i: usize, axis: &str| -> Result<T> {
        let tok = tokens
            .next()
            .with_context(|| format!("expected {n} points, input ends at point {i}"))?;
        tok.parse::<T>()
            .with_context(|| format!("bad {axis} coordinate {tok:?} at point {i}"))
    };
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x = next_coord(i, "x")?;
        let y = next_coord(i, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Write `<count>` and one `x y` line per point.
pub fn write_points<T, W>(w: &mut W, points: &[Point<T>]) -> io::Result<()>
where
    T: Coord + Display,
    W: Write,
{
    writeln!(w, "{}", points.len())?;
    for p in points {
        writeln!(w, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

/// Write a complete input file (dimension line included).
pub fn write_input<T, W>(w: &mut W, points: &[Point<T>]) -> io::Result<()>
where
    T: Coord + Display,
    W: Write,
{
    writeln!(w, "2")?;
    write_points(w, points)
}
