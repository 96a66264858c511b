//! Grout: grid-based polyomino packing primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Grout sub-crates. For most users, adding `grout` as a single
//! dependency is sufficient.
//!
//! The core of the library is a family of deterministic successor
//! functions that enumerate the integer lattice outward from the origin in
//! non-decreasing Chebyshev distance. A packing search walks that
//! enumeration until it finds an anchor where a tile fits, so the
//! enumeration order doubles as the placement preference order. The
//! default [`Jitter`](prelude::Jitter) backend visits each ring mid-edge
//! first to avoid the corner bias of a plain spiral.
//!
//! # Quick start
//!
//! ```rust
//! use grout::prelude::*;
//!
//! // A 1×2 tile over a shared occupancy list.
//! struct Domino {
//!     board: Vec<GridPoint>,
//!     anchor: Option<GridPoint>,
//! }
//!
//! impl Domino {
//!     const CELLS: [GridPoint; 2] = [GridPoint::new(0, 0), GridPoint::new(1, 0)];
//! }
//!
//! impl Polyomino for Domino {
//!     fn intersects(&self, anchor: GridPoint) -> bool {
//!         Self::CELLS.iter().any(|&c| self.board.contains(&(anchor + c)))
//!     }
//!     fn place(&mut self, anchor: GridPoint) {
//!         self.board.extend(Self::CELLS.iter().map(|&c| anchor + c));
//!         self.anchor = Some(anchor);
//!     }
//! }
//!
//! // An empty board places the first tile at the origin.
//! let search = AnchorSearch::new(8).unwrap();
//! let mut domino = Domino { board: Vec::new(), anchor: None };
//! let anchor = search.place(&Jitter, &mut domino).unwrap();
//! assert_eq!(anchor, GridPoint::ORIGIN);
//!
//! // With the origin taken, the next candidate in jitter order wins.
//! let mut second = Domino { board: domino.board.clone(), anchor: None };
//! assert_eq!(search.place(&Jitter, &mut second), Ok(GridPoint::new(0, -1)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grout-core` | [`GridPoint`](types::GridPoint), ring arithmetic, [`Polyomino`](types::Polyomino), [`SearchError`](types::SearchError) |
//! | [`scan`] | `grout-scan` | [`Successor`](scan::Successor) backends, [`Walk`](scan::Walk), [`AnchorSearch`](scan::AnchorSearch) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use grout_core as types;
pub use grout_scan as scan;

pub mod prelude {
    //! Single-import convenience: `use grout::prelude::*;`

    pub use grout_core::{GridPoint, Polyomino, SearchError};
    pub use grout_scan::{AnchorSearch, Jitter, Spiral, Successor, Walk};
}
