//! The core `Successor` trait: deterministic lattice enumeration.

use crate::walk::Walk;
use grout_core::ring::ring_len;
use grout_core::GridPoint;

/// A deterministic successor function over the integer lattice.
///
/// Each backend defines a total, non-repeating order on ℤ × ℤ: starting
/// from the origin and applying [`next`](Self::next) repeatedly visits
/// every lattice point exactly once, in non-decreasing Chebyshev distance.
/// A packing search walks this order until it finds a free anchor, so the
/// enumeration order is exactly the placement preference order.
///
/// # Contract
///
/// For every point `p`:
///
/// - `next(p)` is defined (no error condition) and pure: repeated calls
///   with the same argument agree, with no hidden state;
/// - `next(p).ring()` is `p.ring()` or `p.ring() + 1` — the walk never
///   falls back toward the origin;
/// - each ring is visited completely (all `8k` points of ring k, each
///   exactly once) before the walk steps outward;
/// - `next` runs in O(1) time and space, purely from its argument.
///
/// Coordinates are `i32`; the contract assumes `|x|` and `|y|` stay below
/// `i32::MAX`. [`AnchorSearch`](crate::AnchorSearch) enforces that bound
/// for driven searches.
///
/// # Thread safety
///
/// Backends are stateless value types. `Send + Sync` is required so one
/// backend instance can serve concurrent searches; calls need no
/// synchronization because each depends only on its argument.
pub trait Successor: Send + Sync {
    /// The point visited immediately after `p`.
    fn next(&self, p: GridPoint) -> GridPoint;

    /// The first point of ring `k` in this backend's visiting order.
    ///
    /// Ring 0 is entered at the origin. For k ≥ 1 this is the point the
    /// walk lands on when it steps outward from ring `k - 1`.
    fn ring_entry(&self, k: u32) -> GridPoint;

    /// The points of ring `k` in visiting order.
    ///
    /// Length is 1 for ring 0 and `8k` otherwise. Deterministic: two calls
    /// on the same backend return the same sequence.
    fn ring_ordering(&self, k: u32) -> Vec<GridPoint> {
        let len = ring_len(k) as usize;
        let mut out = Vec::with_capacity(len);
        let mut p = self.ring_entry(k);
        for _ in 0..len {
            out.push(p);
            p = self.next(p);
        }
        out
    }

    /// An infinite walk `start, next(start), next²(start), …`.
    fn walk(&self, start: GridPoint) -> Walk<'_>
    where
        Self: Sized,
    {
        Walk::new(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Jitter, Spiral};

    // Backends must be usable behind `&dyn Successor`, since the driver
    // swaps enumeration orders at runtime.
    #[test]
    fn trait_is_object_safe() {
        let backends: [&dyn Successor; 2] = [&Jitter, &Spiral];
        for seq in backends {
            assert_eq!(seq.ring_entry(0), GridPoint::ORIGIN);
            assert_eq!(seq.next(GridPoint::ORIGIN), GridPoint::new(0, -1));
        }
    }

    #[test]
    fn ring_ordering_lengths() {
        for k in 0..6 {
            let expected = if k == 0 { 1 } else { 8 * k as usize };
            assert_eq!(Jitter.ring_ordering(k).len(), expected);
            assert_eq!(Spiral.ring_ordering(k).len(), expected);
        }
    }
}
