//! Per-axis slice specifications.
//!
//! A [`Span`] is one axis's worth of a board slice: an optional start, an
//! optional stop, and a step. The std range types convert into it, so a
//! 2D slice is written `board.slice(&spans![1.., 1..3])`.
//!
//! [`Span`]: struct.Span.html

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::dim::Dim;
use crate::error::{BoardError, BoardResult};

/// Start/stop/step selection along a single axis.
///
/// `None` endpoints are open: an open start means the beginning of the axis,
/// an open stop means its end (which, for an infinite axis, keeps the slice
/// infinite). Negative endpoints count back from the end of a finite axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    /// First position selected, or `None` for the start of the axis.
    pub start: Option<isize>,
    /// One past the last position selected, or `None` for the end of the
    /// axis.
    pub stop: Option<isize>,
    /// Step between selected positions. Anything but ±1 is rejected.
    pub step: isize,
}

impl Span {
    /// Creates a span with the given endpoints and a step of 1.
    #[inline]
    pub fn new(start: impl Into<Option<isize>>, stop: impl Into<Option<isize>>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            step: 1,
        }
    }

    /// Creates a span selecting the whole axis.
    #[inline]
    pub fn full() -> Self {
        Self::new(None, None)
    }

    /// Resolves this span against an axis, following the clamping rules of
    /// Python's `slice.indices`: out-of-range endpoints on a finite axis are
    /// clamped rather than rejected, and a stop before the start yields an
    /// empty axis.
    ///
    /// Returns the local start position together with the sliced axis.
    pub(crate) fn resolve(&self, dim: Dim) -> BoardResult<(isize, Dim)> {
        if self.step != 1 && self.step != -1 {
            return Err(BoardError::UnsupportedStride { step: self.step });
        }
        match dim {
            Dim::Finite(size) => {
                let size = size as isize;
                let clamp = |v: isize| v.max(0).min(size);
                let resolve = |v: isize| if v < 0 { size + v } else { v };
                let start = clamp(self.start.map_or(0, resolve));
                let stop = clamp(self.stop.map_or(size, resolve));
                let len = (stop - start).max(0) as usize;
                Ok((start, Dim::Finite(len)))
            }
            Dim::Infinite => {
                let start = match self.start {
                    None => 0,
                    Some(v) if v < 0 => {
                        return Err(BoardError::NegativeIndexOnInfinite { index: v })
                    }
                    Some(v) => v,
                };
                match self.stop {
                    None => Ok((start, Dim::Infinite)),
                    Some(v) if v < 0 => Err(BoardError::NegativeIndexOnInfinite { index: v }),
                    Some(stop) => Ok((start, Dim::Finite((stop - start).max(0) as usize))),
                }
            }
        }
    }
}

impl From<RangeFull> for Span {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}
impl From<Range<isize>> for Span {
    fn from(r: Range<isize>) -> Self {
        Self::new(r.start, r.end)
    }
}
impl From<RangeFrom<isize>> for Span {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(r.start, None)
    }
}
impl From<RangeTo<isize>> for Span {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, r.end)
    }
}
impl From<RangeInclusive<isize>> for Span {
    fn from(r: RangeInclusive<isize>) -> Self {
        Self::new(*r.start(), *r.end() + 1)
    }
}
impl From<RangeToInclusive<isize>> for Span {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Self::new(None, r.end + 1)
    }
}
