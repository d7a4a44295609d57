//! Board axes, finite or infinite, and the lengths they report.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{BoardError, BoardResult};
use crate::span::Span;

/// Number of positions an infinite axis advances per iteration round.
///
/// Iterating a board with an unbounded axis proceeds in chunks of this many
/// positions so that every finite axis is revisited regularly instead of the
/// iterator disappearing down one endless axis.
pub const CHUNK_SIZE: usize = 10;

/// Length of an axis or of a whole board.
///
/// `Infinite` compares greater than every finite length and equal only to
/// itself; it is a proper enum case, not a magic large integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Size {
    /// Bounded length.
    Finite(usize),
    /// Unbounded length. Displays as `Infinity`.
    Infinite,
}

impl Size {
    /// Returns `true` if this is a finite length.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Size::Finite(_))
    }
    /// Returns `true` if this is the infinite length.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Size::Infinite)
    }
    /// Returns the finite length, or `None` if infinite.
    #[inline]
    pub fn to_usize(self) -> Option<usize> {
        match self {
            Size::Finite(n) => Some(n),
            Size::Infinite => None,
        }
    }
}

impl Ord for Size {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Size::Finite(a), Size::Finite(b)) => a.cmp(b),
            (Size::Finite(_), Size::Infinite) => Ordering::Less,
            (Size::Infinite, Size::Finite(_)) => Ordering::Greater,
            (Size::Infinite, Size::Infinite) => Ordering::Equal,
        }
    }
}
impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Finite(n) => fmt::Display::fmt(n, f),
            Size::Infinite => write!(f, "Infinity"),
        }
    }
}

impl From<usize> for Size {
    fn from(n: usize) -> Self {
        Size::Finite(n)
    }
}

/// One axis of a board: either a contiguous integer range `[0, size)` or the
/// unbounded range `[0, ∞)`.
///
/// Two finite axes are equal iff they have the same size; any two infinite
/// axes are equal to each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dim {
    /// Bounded axis covering `[0, size)`.
    Finite(usize),
    /// Unbounded axis covering `[0, ∞)`.
    Infinite,
}

impl Dim {
    /// Returns the length of the axis.
    #[inline]
    pub fn len(self) -> Size {
        match self {
            Dim::Finite(size) => Size::Finite(size),
            Dim::Infinite => Size::Infinite,
        }
    }
    /// Returns `true` if the axis contains no positions at all.
    ///
    /// Only sliced axes can be empty; root boards reject zero sizes.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Dim::Finite(0)
    }
    /// Returns `true` if the axis is bounded.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Dim::Finite(_))
    }
    /// Returns `true` if the axis is unbounded.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Dim::Infinite)
    }

    /// Returns `true` if `c` is a valid position on this axis.
    #[inline]
    pub fn contains(self, c: isize) -> bool {
        match self {
            Dim::Finite(size) => 0 <= c && c < size as isize,
            Dim::Infinite => 0 <= c,
        }
    }

    /// Resolves an index against this axis, counting negative indices back
    /// from the end of a finite axis.
    ///
    /// Infinite axes have no end to count back from, so a negative index on
    /// one is an error. The result may still be out of bounds (e.g. `-10` on
    /// an axis of size 4 resolves to `-6`); callers bounds-check separately.
    pub fn resolve_index(self, c: isize) -> BoardResult<isize> {
        if c >= 0 {
            return Ok(c);
        }
        match self {
            Dim::Finite(size) => Ok(size as isize + c),
            Dim::Infinite => Err(BoardError::NegativeIndexOnInfinite { index: c }),
        }
    }

    /// Returns the position at index `i` on this axis.
    ///
    /// Finite axes support negative indices counting from the end. Infinite
    /// axes only answer for the first element (`0`) and the last (`-1`,
    /// which is `Infinity`).
    pub fn at(self, i: isize) -> BoardResult<Size> {
        match self {
            Dim::Finite(_) => {
                let resolved = self.resolve_index(i)?;
                if self.contains(resolved) {
                    Ok(Size::Finite(resolved as usize))
                } else {
                    Err(BoardError::OutOfBounds {
                        coord: vec![i],
                        shape: format!("({})", self.len()),
                    })
                }
            }
            Dim::Infinite => match i {
                0 => Ok(Size::Finite(0)),
                -1 => Ok(Size::Infinite),
                i if i < 0 => Err(BoardError::NegativeIndexOnInfinite { index: i }),
                _ => Err(BoardError::OutOfBounds {
                    coord: vec![i],
                    shape: "(Infinity)".to_owned(),
                }),
            },
        }
    }

    /// Slices this axis, returning the resulting (possibly narrower) axis.
    ///
    /// An infinite axis sliced open-ended stays infinite; with a concrete
    /// stop it becomes the finite range `[start, stop)`.
    pub fn slice(self, span: &Span) -> BoardResult<Dim> {
        span.resolve(self).map(|(_start, dim)| dim)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.len(), f)
    }
}

/// Returns `true` if every component of `coord` lies on the corresponding
/// axis. Assumes matching arity.
pub(crate) fn coord_in_bounds(coord: &[isize], dims: &[Dim]) -> bool {
    coord.iter().zip(dims).all(|(&c, d)| d.contains(c))
}
