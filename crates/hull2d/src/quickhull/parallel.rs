//! Parallel Quickhull on a bounded rayon pool.
//!
//! The two halves and, below them, the right group of every split are spawned
//! as scope tasks while the left group continues in the current worker. Past
//! the fan-out depth the recursion is sequential. Windows come from
//! `split_at_mut`, so tasks never alias; `scope` joins them before compaction.

use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use super::bisect::bisect;
use super::compact::remove_not_on_hull;
use super::partition::{split_chord, PartitionStrategy};
use super::recursive::{refine, solve_with};
use super::slice::{solve_slice_parallel, SliceCfg};
use crate::geom2::{Coord, Point};

/// How the work is divided before the first parallel step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMethod {
    /// Extremal bisection, then recursive fan-out.
    #[default]
    Bisection,
    /// One slice per extremal direction (see `slice`).
    Directions,
}

/// Parallel solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelCfg {
    /// Worker count; `None` uses the available parallelism.
    pub threads: Option<usize>,
    pub strategy: PartitionStrategy,
    pub split: SplitMethod,
}

impl Default for ParallelCfg {
    fn default() -> Self {
        Self {
            threads: None,
            strategy: PartitionStrategy::FirstPartitionByX,
            split: SplitMethod::Bisection,
        }
    }
}

impl ParallelCfg {
    pub fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: Some(threads),
            ..self
        }
    }

    #[inline]
    pub fn resolved_threads(&self) -> usize {
        resolve_threads(self.threads)
    }
}

/// Explicit positive count, else the machine's available parallelism.
pub(crate) fn resolve_threads(threads: Option<usize>) -> usize {
    match threads {
        Some(t) if t > 0 => t,
        _ => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    }
}

/// Levels of recursion that still spawn: `floor(log2(threads))`.
#[inline]
pub fn fan_out_depth(threads: usize) -> u32 {
    threads.max(1).ilog2()
}

fn refine_par<'s, T: Coord>(
    scope: &rayon::Scope<'s>,
    pts: &'s mut [Point<T>],
    left: Point<T>,
    right: Point<T>,
    strategy: PartitionStrategy,
    depth: u32,
) {
    if depth == 0 {
        refine(pts, left, right, strategy);
        return;
    }
    let Some((apex, split)) = split_chord(pts, left, right, strategy) else {
        return;
    };
    let (right_pts, left_pts) = split.windows(pts);
    scope.spawn(move |s| refine_par(s, right_pts, apex, right, strategy, depth - 1));
    refine_par(scope, left_pts, left, apex, strategy, depth - 1);
}

/// Parallel Quickhull. Same output as [`solve_with`] for every configuration.
pub fn solve_parallel<T: Coord>(points: &mut Vec<Point<T>>, cfg: ParallelCfg) {
    let strategy = cfg.strategy;
    if cfg.split == SplitMethod::Directions {
        let slice_cfg = SliceCfg {
            threads: cfg.threads,
            ..SliceCfg::default()
        };
        solve_slice_parallel(points, slice_cfg, |p: &mut Vec<Point<T>>| {
            solve_with(p, strategy)
        });
        return;
    }
    if points.len() <= 1 {
        return;
    }

    let threads = cfg.resolved_threads();
    let pool = match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(err) => {
            warn!(%err, threads, "thread pool unavailable; solving sequentially");
            solve_with(points, strategy);
            return;
        }
    };

    let Some(halves) = bisect(points) else {
        points.truncate(1);
        return;
    };
    let depth = fan_out_depth(threads);
    debug!(n = points.len(), threads, depth, %strategy, "parallel quickhull");

    let (left, right) = (halves.left, halves.right);
    let (below, above) = halves.windows(points);
    pool.scope(move |s| {
        s.spawn(move |s| refine_par(s, below, right, left, strategy, depth));
        refine_par(s, above, left, right, strategy, depth);
    });
    remove_not_on_hull(points);
}
