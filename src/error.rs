//! Error types for board operations.

use thiserror::Error;

/// Result type returned by fallible board routines.
pub type BoardResult<T> = Result<T, BoardError>;

/// Error raised by a board operation.
///
/// Every variant reports a caller error (a malformed coordinate or slice),
/// raised synchronously at the offending call; none is transient or
/// recoverable by retrying.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// Board constructed with no axes or a zero-size axis, or a coordinate
    /// or slice specification whose arity does not match the board's
    /// dimensionality.
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions {
        /// Description of the mismatch.
        reason: String,
    },

    /// Coordinate of the right arity whose components fall outside the
    /// board's axes.
    #[error("coordinate {coord:?} is out of bounds for a board of shape {shape}")]
    OutOfBounds {
        /// The offending (already normalized) coordinate.
        coord: Vec<isize>,
        /// Human-readable board shape, e.g. `(4, Infinity)`.
        shape: String,
    },

    /// Negative index used on an infinite axis, which has no last element to
    /// count back from.
    #[error("cannot use negative index {index} on an infinite axis")]
    NegativeIndexOnInfinite {
        /// The offending index.
        index: isize,
    },

    /// Slice step other than ±1. An offset view cannot express strided or
    /// reordered axes.
    #[error("unsupported stride {step}; only a step of ±1 is allowed")]
    UnsupportedStride {
        /// The offending step.
        step: isize,
    },

    /// Placement collided with a coordinate that already holds data.
    #[error("placement overlaps occupied coordinate {coord:?}")]
    Overlap {
        /// The first occupied coordinate hit.
        coord: Vec<isize>,
    },
}

impl BoardError {
    /// Convenience constructor for arity mismatches.
    pub(crate) fn arity(what: &str, got: usize, ndim: usize) -> Self {
        BoardError::InvalidDimensions {
            reason: format!("{} has {} dimensions; the board has {}", what, got, ndim),
        }
    }
}
