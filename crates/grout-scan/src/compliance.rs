//! Successor contract compliance helpers.
//!
//! These functions verify that a backend satisfies the invariants required
//! by the [`Successor`] trait contract. Reused across the backend test
//! modules (Jitter, Spiral).

use crate::successor::Successor;
use crate::walk::Walk;
use grout_core::ring::{disc_len, ring_len};
use grout_core::GridPoint;
use indexmap::IndexSet;

/// Every point of the window maps to the same ring or one ring outward.
pub fn assert_ring_monotone(seq: &dyn Successor, radius: u32) {
    let r = radius as i32;
    for x in -r..=r {
        for y in -r..=r {
            let p = GridPoint::new(x, y);
            let next = seq.next(p);
            assert!(
                next.ring() == p.ring() || next.ring() == p.ring() + 1,
                "ring fell back: next({p:?}) = {next:?}"
            );
        }
    }
}

/// From the ring-k entry, `ring_len(k)` steps visit `ring_len(k)` distinct
/// points of ring k, then land exactly on the ring-(k+1) entry.
pub fn assert_ring_complete(seq: &dyn Successor, k: u32) {
    let mut p = seq.ring_entry(k);
    let mut seen = IndexSet::new();
    for _ in 0..ring_len(k) {
        assert_eq!(p.ring(), k, "left ring {k} early at {p:?}");
        assert!(seen.insert(p), "revisited {p:?} within ring {k}");
        p = seq.next(p);
    }
    assert_eq!(
        p,
        seq.ring_entry(k + 1),
        "ring {k} did not hand off to the ring-{} entry",
        k + 1
    );
}

/// Two applications from the same input agree, point by point.
pub fn assert_deterministic(seq: &dyn Successor, radius: u32) {
    let r = radius as i32;
    for x in -r..=r {
        for y in -r..=r {
            let p = GridPoint::new(x, y);
            assert_eq!(seq.next(p), seq.next(p), "non-deterministic at {p:?}");
        }
    }
}

/// No point in the window maps to itself.
pub fn assert_no_fixed_point(seq: &dyn Successor, radius: u32) {
    let r = radius as i32;
    for x in -r..=r {
        for y in -r..=r {
            let p = GridPoint::new(x, y);
            assert_ne!(seq.next(p), p, "fixed point at {p:?}");
        }
    }
}

/// The first `(2·radius + 1)²` candidates from the origin are exactly the
/// radius-`radius` disc: right count, all distinct, none outside.
pub fn assert_plane_coverage(seq: &dyn Successor, radius: u32) {
    let budget = disc_len(radius);
    let mut walk = Walk::new(seq, GridPoint::ORIGIN);
    let mut seen = IndexSet::new();
    for _ in 0..budget {
        let p = walk.step();
        assert!(p.in_disc(radius), "escaped the disc early at {p:?}");
        assert!(seen.insert(p), "revisited {p:?}");
    }
    assert_eq!(seen.len() as u64, budget);
}

/// Run all compliance checks on a backend over a small window.
pub fn run_full_compliance(seq: &dyn Successor, radius: u32) {
    assert_ring_monotone(seq, radius);
    assert_deterministic(seq, radius);
    assert_no_fixed_point(seq, radius);
    assert_plane_coverage(seq, radius);
    for k in 0..=radius {
        assert_ring_complete(seq, k);
    }
}
