//! Board coordinates.
//!
//! A coordinate is an n-tuple of integers whose arity must match the board's
//! dimensionality at every access. Components are `isize` so that negative
//! indices (counting back from the end of a finite axis) can be expressed;
//! normalized coordinates are always non-negative.

use itertools::Itertools;

/// An n-dimensional coordinate.
pub type Coord = Vec<isize>;

/// Formats a coordinate the way it appears in errors and dumps: `(1, 2, 3)`.
pub(crate) fn fmt_coord(coord: &[isize]) -> String {
    format!("({})", coord.iter().join(", "))
}
