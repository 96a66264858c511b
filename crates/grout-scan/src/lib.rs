//! Expanding-square candidate enumeration for polyomino packing.
//!
//! This crate defines the [`Successor`] trait — the deterministic
//! point-to-point enumeration through which a packing search generates
//! candidate anchors — along with the concrete backends and the bounded
//! first-fit driver.
//!
//! # Backends
//!
//! - [`Jitter`]: mid-edge-first jittered order; the default for packing,
//!   because it avoids the corner bias of a plain spiral
//! - [`Spiral`]: corner-aligned clockwise spiral baseline
//!
//! # Driving a search
//!
//! [`Walk`] turns a backend into an infinite candidate iterator;
//! [`AnchorSearch`] bounds that walk with an explicit ring budget and
//! reports exhaustion as a typed error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod jitter;
pub mod search;
pub mod spiral;
pub mod successor;
pub mod walk;

#[cfg(test)]
pub(crate) mod compliance;

pub use jitter::Jitter;
pub use search::AnchorSearch;
pub use spiral::Spiral;
pub use successor::Successor;
pub use walk::Walk;
