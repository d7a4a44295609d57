//! N-dimensional sparse boards with finite and infinite axes.
//!
//! A [`Board`] maps coordinates to values. Any axis may be unbounded, storage
//! is sparse, and a board can be sliced into *views* that alias the same
//! backing store through a composed offset, so writes through one view are
//! visible through every other.
//!
//! ```
//! use ndboard::prelude::*;
//! use ndboard::spans;
//!
//! let mut b: Board<char> = Board::new(&[Finite(4), Infinite]).unwrap();
//! b.set(&[2, 100], '*').unwrap();
//! assert_eq!(b.get(&[2, 100]).unwrap(), Some('*'));
//!
//! // A view sharing the same storage, offset by (1, 1).
//! let v = b.slice(&spans![1.., 1..]).unwrap();
//! assert_eq!(v.get(&[1, 99]).unwrap(), Some('*'));
//! ```
//!
//! [`Board`]: board/struct.Board.html

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
mod macros;

pub mod board;
pub mod coord;
pub mod dim;
pub mod error;
pub mod span;

pub mod prelude {
    //! Common imports: the board, its axis and size types, spans, and errors.

    pub use crate::board::{Board, CoordRange, Coords, Line};
    pub use crate::coord::Coord;
    pub use crate::dim::Size::{Finite, Infinite};
    pub use crate::dim::{Dim, Size, CHUNK_SIZE};
    pub use crate::error::{BoardError, BoardResult};
    pub use crate::span::Span;
}

#[cfg(test)]
mod tests;
