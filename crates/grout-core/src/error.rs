//! Error types for the anchor search driver.

use std::fmt;

/// Errors from bounded anchor search.
///
/// The successor functions themselves are total and cannot fail; errors
/// only arise at the driver seam, where a search must either respect a
/// ring budget or refuse one that the coordinate range cannot represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Every candidate within the ring budget was rejected.
    ///
    /// Distinguishes "ran out of search space" from "found an anchor":
    /// callers may retry with a larger budget or treat the board as full.
    Exhausted {
        /// The inclusive ring index the search ran up to.
        ring_limit: u32,
    },
    /// The requested ring budget exceeds the coordinate range guard.
    RingLimitTooLarge {
        /// The offending budget.
        value: u32,
        /// Largest accepted budget.
        max: u32,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { ring_limit } => {
                write!(f, "no free anchor within ring {ring_limit}")
            }
            Self::RingLimitTooLarge { value, max } => {
                write!(f, "ring limit {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
