//! The corner-aligned spiral successor.

use crate::successor::Successor;
use grout_core::GridPoint;

/// The plain expanding spiral.
///
/// Walks each ring edge by edge — top rightward, right downward, bottom
/// leftward, left upward — and hands off to the next ring from the same
/// diagonal `x <= 0 && x == y` that [`Jitter`](crate::Jitter) uses, so
/// both backends close every ring at `(-k, -k)`. Ring k (k ≥ 1) is entered
/// at `(-(k-1), -k)`, one step right of the top-left corner.
///
/// This is the unbiased baseline order: placements accumulate toward the
/// corner where each ring starts, which is exactly the visual bias the
/// jittered order exists to avoid. It is kept as a backend because the
/// contrast is cheap to maintain and some boards want the raster-like
/// fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spiral;

impl Successor for Spiral {
    fn next(&self, p: GridPoint) -> GridPoint {
        let r = p.ring() as i32;
        if p.x <= 0 && p.x == p.y {
            // Closing corner (or the origin): hand off to the next ring.
            GridPoint::new(p.x, p.y - 1)
        } else if p.y == -r && p.x < r {
            // Top edge, rightward.
            GridPoint::new(p.x + 1, p.y)
        } else if p.x == r && p.y < r {
            // Right edge, downward.
            GridPoint::new(p.x, p.y + 1)
        } else if p.y == r && p.x > -r {
            // Bottom edge, leftward.
            GridPoint::new(p.x - 1, p.y)
        } else {
            // Left edge, upward toward the closing corner.
            GridPoint::new(p.x, p.y - 1)
        }
    }

    fn ring_entry(&self, k: u32) -> GridPoint {
        if k == 0 {
            GridPoint::ORIGIN
        } else {
            let k = k as i32;
            GridPoint::new(-(k - 1), -k)
        }
    }
}
