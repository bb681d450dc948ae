//! Iterative Quickhull over an explicit task stack.
//!
//! Tasks are index ranges into the single owned buffer, so no subrange ever
//! escapes the buffer; the work is the same as `recursive::refine`.

use super::bisect::bisect;
use super::partition::{split_chord, PartitionStrategy};
use super::compact::remove_not_on_hull;
use crate::geom2::{Coord, Point};

/// One pending chord: candidates `lo..hi` against `left → right`.
#[derive(Clone, Copy, Debug)]
struct Task<T> {
    lo: usize,
    hi: usize,
    left: Point<T>,
    right: Point<T>,
}

/// Quickhull without recursion.
pub fn solve_worklist<T: Coord>(points: &mut Vec<Point<T>>, strategy: PartitionStrategy) {
    if points.len() <= 1 {
        return;
    }
    let Some(halves) = bisect(points) else {
        points.truncate(1);
        return;
    };
    let mut stack: Vec<Task<T>> = Vec::new();
    push(&mut stack, halves.below.start, halves.below.end, halves.right, halves.left);
    push(&mut stack, halves.above.start, halves.above.end, halves.left, halves.right);

    while let Some(task) = stack.pop() {
        let pts = &mut points[task.lo..task.hi];
        let Some((apex, split)) = split_chord(pts, task.left, task.right, strategy) else {
            continue;
        };
        push(
            &mut stack,
            task.lo + split.left.start,
            task.lo + split.left.end,
            task.left,
            apex,
        );
        push(&mut stack, task.lo, task.lo + split.right_len, apex, task.right);
    }
    remove_not_on_hull(points);
}

#[inline]
fn push<T>(stack: &mut Vec<Task<T>>, lo: usize, hi: usize, left: Point<T>, right: Point<T>) {
    if hi > lo {
        stack.push(Task { lo, hi, left, right });
    }
}
