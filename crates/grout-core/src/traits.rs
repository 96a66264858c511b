//! The tile-placement seam between the enumeration core and its callers.

use crate::point::GridPoint;

/// A rigid tile being placed on a shared board.
///
/// The enumeration core never inspects tile geometry or board contents.
/// All it needs from a tile is an overlap test for a candidate anchor and
/// a way to commit the winning anchor; cell shapes, collision semantics,
/// and tie breaking all stay on the caller's side of this trait.
pub trait Polyomino {
    /// Would anchoring this tile at `anchor` overlap anything already placed?
    fn intersects(&self, anchor: GridPoint) -> bool;

    /// Commit this tile at `anchor`.
    ///
    /// Called at most once per search, with an anchor for which
    /// [`intersects`](Self::intersects) returned `false`.
    fn place(&mut self, anchor: GridPoint);
}
