//! The jittered expanding-square successor.

use crate::successor::Successor;
use grout_core::GridPoint;

/// Which branch of [`Jitter::next`] applies to a point.
///
/// The hand-off predicate `x <= 0 && x == y` deliberately conflates two
/// events: standing at the origin and standing at a ring's closing corner
/// `(-k, -k)`. Both jump the walk to the next ring's entry `(0, -(k+1))`.
/// Keep the predicate exactly as written — the mid-edge-first order
/// depends on this case split, and the left-edge branch must be tested on
/// its own because its `+1` shift is the only asymmetry in the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Case {
    /// On the diagonal `x == y` at or left of the origin: the current ring
    /// is complete, step outward.
    HandOff,
    /// On the ring's left edge, closing corner excluded: rotate onto the
    /// top edge, then shift one step along it when `y >= 0`.
    JitterEdge,
    /// Anywhere else on the ring: plain quarter-turn about the origin.
    Turn,
}

fn classify(p: GridPoint) -> Case {
    let ring = p.ring() as i32;
    if p.x <= 0 && p.x == p.y {
        Case::HandOff
    } else if p.x == -ring && p.y != ring {
        Case::JitterEdge
    } else {
        Case::Turn
    }
}

/// The jittered expanding-square order.
///
/// Enumerates ℤ × ℤ outward from the origin in non-decreasing Chebyshev
/// distance. Within each ring the four mid-edge points come first; the
/// walk then keeps cycling the ring in quarter-turns, edging one step
/// closer to the corners per cycle, so the corners land last. The
/// irregularity is a fixed deterministic pattern — nothing here is
/// random, despite the name.
///
/// The first nine candidates cover the origin and all of ring 1:
/// `(0,0), (0,-1), (1,0), (0,1), (-1,0), (1,-1), (1,1), (-1,1), (-1,-1)`.
/// Laid out on the 3×3 grid (rows `y = -1, 0, 1`), by visit number:
///
/// ```text
/// 9 2 6
/// 5 1 3
/// 8 4 7
/// ```
///
/// Packing searches prefer this order over a plain spiral because
/// equal-distance candidates spread around the ring instead of clustering
/// at whichever corner the spiral reaches first.
///
/// Stateless unit struct: copy it freely or share one instance across
/// threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Jitter;

impl Successor for Jitter {
    fn next(&self, p: GridPoint) -> GridPoint {
        match classify(p) {
            Case::HandOff => GridPoint::new(0, p.y - 1),
            Case::JitterEdge => {
                let shift = i32::from(p.y >= 0);
                GridPoint::new(p.y + shift, p.x)
            }
            Case::Turn => GridPoint::new(-p.y, p.x),
        }
    }

    fn ring_entry(&self, k: u32) -> GridPoint {
        GridPoint::new(0, -(k as i32))
    }
}
