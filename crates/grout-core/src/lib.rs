//! Core types and traits for the Grout packing primitives.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! lattice point type, Chebyshev ring arithmetic, the tile-placement seam
//! ([`Polyomino`]), and the search error taxonomy shared by the rest of
//! the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;
pub mod ring;
pub mod traits;

pub use error::SearchError;
pub use point::GridPoint;
pub use traits::Polyomino;
