//! Bounded first-fit anchor search over a successor walk.

use crate::successor::Successor;
use crate::walk::Walk;
use grout_core::{GridPoint, Polyomino, SearchError};

/// First-fit placement search with an explicit ring budget.
///
/// The successor walk itself never terminates, so the one liveness
/// decision a packing search must make — when to give up on a board with
/// no free anchor — lives here. The budget is an inclusive ring index:
/// candidates are taken from the walk until their Chebyshev distance
/// exceeds it, at which point the search fails with
/// [`SearchError::Exhausted`]. Because every backend enumerates rings in
/// order, the first candidate past the budget proves nothing closer
/// remains unvisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorSearch {
    max_ring: u32,
}

impl AnchorSearch {
    /// Largest accepted ring budget.
    ///
    /// Coordinates are `i32`; capping the budget one short of `i32::MAX`
    /// keeps every coordinate a bounded walk can produce — including the
    /// one-step jitter shift — inside the representable range.
    pub const MAX_RING: u32 = i32::MAX as u32 - 1;

    /// Create a search bounded to rings `0..=max_ring`.
    ///
    /// Returns `Err(SearchError::RingLimitTooLarge)` if the budget exceeds
    /// [`MAX_RING`](Self::MAX_RING).
    pub fn new(max_ring: u32) -> Result<Self, SearchError> {
        if max_ring > Self::MAX_RING {
            return Err(SearchError::RingLimitTooLarge {
                value: max_ring,
                max: Self::MAX_RING,
            });
        }
        Ok(Self { max_ring })
    }

    /// The inclusive ring budget.
    pub fn max_ring(&self) -> u32 {
        self.max_ring
    }

    /// The first anchor within the budget accepted by `is_free`.
    ///
    /// Candidates are generated by walking `seq` from the origin, so the
    /// acceptance order is exactly the backend's enumeration order. The
    /// predicate is called once per rejected candidate plus once for the
    /// returned anchor.
    pub fn find(
        &self,
        seq: &dyn Successor,
        mut is_free: impl FnMut(GridPoint) -> bool,
    ) -> Result<GridPoint, SearchError> {
        let mut walk = Walk::new(seq, GridPoint::ORIGIN);
        loop {
            let anchor = walk.step();
            if !anchor.in_disc(self.max_ring) {
                return Err(SearchError::Exhausted {
                    ring_limit: self.max_ring,
                });
            }
            if is_free(anchor) {
                return Ok(anchor);
            }
        }
    }

    /// Find a free anchor for `poly` and commit it.
    ///
    /// Equivalent to [`find`](Self::find) with the tile's own overlap test
    /// as the predicate, followed by [`Polyomino::place`] on the winning
    /// anchor. On exhaustion the tile is left unplaced.
    pub fn place<P: Polyomino + ?Sized>(
        &self,
        seq: &dyn Successor,
        poly: &mut P,
    ) -> Result<GridPoint, SearchError> {
        let anchor = self.find(seq, |a| !poly.intersects(a))?;
        poly.place(anchor);
        Ok(anchor)
    }
}
