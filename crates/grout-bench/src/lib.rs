//! Benchmark fixtures for the Grout packing primitives.
//!
//! Provides deterministic occupancy patterns so bench runs are
//! reproducible without a random number generator.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grout_core::GridPoint;
use indexmap::IndexSet;

/// Every point with Chebyshev distance at most `radius`.
///
/// Forces an anchor search to scan the full disc before succeeding on the
/// first point of ring `radius + 1`.
pub fn blocked_disc(radius: u32) -> impl Fn(GridPoint) -> bool {
    move |p| p.in_disc(radius)
}

/// A scattered occupancy set of `count` points within `radius`.
///
/// Coordinates come from a fixed multiplicative hash, so every call with
/// the same arguments builds the same board.
pub fn scattered_occupancy(radius: u32, count: usize) -> IndexSet<GridPoint> {
    let span = 2 * i64::from(radius) + 1;
    let mut out = IndexSet::with_capacity(count);
    let mut i: u64 = 0;
    while out.len() < count {
        let x = ((i.wrapping_mul(6364136223846793007) >> 11) as i64).rem_euclid(span);
        let y = ((i.wrapping_mul(1442695040888963407) >> 11) as i64).rem_euclid(span);
        let r = i64::from(radius);
        out.insert(GridPoint::new((x - r) as i32, (y - r) as i32));
        i += 1;
    }
    out
}
