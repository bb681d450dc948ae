//! Compaction: the second phase after sentinel marking.

use crate::geom2::{Coord, Point};

/// Drop every "not on hull" slot, keeping the survivors in order.
#[inline]
pub fn remove_not_on_hull<T: Coord>(points: &mut Vec<Point<T>>) {
    points.retain(|p| !p.is_not_on_hull());
}
