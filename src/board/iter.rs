//! Iterators over board coordinates.

use crate::coord::Coord;
use crate::dim::{coord_in_bounds, Dim, CHUNK_SIZE};

/// Iterator over every coordinate in an axis-aligned box, both corners
/// inclusive. Row-major: the last axis varies fastest.
#[derive(Debug, Clone)]
pub struct CoordRange {
    start: Coord,
    end: Coord,
    next: Option<Coord>,
}

impl CoordRange {
    pub(crate) fn new(start: Coord, end: Coord) -> Self {
        // A box with any reversed axis contains no coordinates.
        let next = if !start.is_empty() && start.iter().zip(&end).all(|(a, b)| a <= b) {
            Some(start.clone())
        } else {
            None
        };
        Self { start, end, next }
    }

    pub(crate) fn empty(ndim: usize) -> Self {
        Self {
            start: vec![0; ndim],
            end: vec![-1; ndim],
            next: None,
        }
    }
}

impl Iterator for CoordRange {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let ret = self.next.clone();
        if let Some(next) = &mut self.next {
            for ax in (0..next.len()).rev() {
                // Increment this axis.
                next[ax] += 1;
                // If this axis overflows, reset it and carry into the next
                // slower axis; otherwise we're done.
                if next[ax] > self.end[ax] {
                    next[ax] = self.start[ax];
                } else {
                    return ret;
                }
            }
            // Overflowed on every axis: the box is exhausted.
            self.next = None;
        }
        ret
    }
}

/// Iterator over every coordinate in a board's declared extent.
///
/// If every axis is finite this is the full Cartesian product and terminates.
/// If any axis is infinite the iteration proceeds in rounds: each round
/// advances every infinite axis by [`CHUNK_SIZE`] positions and re-runs the
/// finite axes in full combination with that window, so the sequence is
/// infinite and the caller must bound it.
///
/// [`CHUNK_SIZE`]: ../dim/constant.CHUNK_SIZE.html
#[derive(Debug, Clone)]
pub struct Coords {
    dims: Vec<Dim>,
    chunk_start: isize,
    chunked: bool,
    inner: CoordRange,
}

impl Coords {
    pub(crate) fn new(dims: Vec<Dim>) -> Self {
        let empty = dims.iter().any(|d| d.is_empty());
        let chunked = !empty && dims.iter().any(|d| d.is_infinite());
        let inner = if empty {
            CoordRange::empty(dims.len())
        } else {
            Self::chunk_range(&dims, 0)
        };
        Self {
            dims,
            chunk_start: 0,
            chunked,
            inner,
        }
    }

    fn chunk_range(dims: &[Dim], chunk_start: isize) -> CoordRange {
        let start = dims
            .iter()
            .map(|d| if d.is_infinite() { chunk_start } else { 0 })
            .collect();
        let end = dims
            .iter()
            .map(|d| match d {
                Dim::Finite(size) => *size as isize - 1,
                Dim::Infinite => chunk_start + CHUNK_SIZE as isize - 1,
            })
            .collect();
        CoordRange::new(start, end)
    }
}

impl Iterator for Coords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        loop {
            if let Some(coord) = self.inner.next() {
                return Some(coord);
            }
            if !self.chunked {
                return None;
            }
            self.chunk_start += CHUNK_SIZE as isize;
            self.inner = Self::chunk_range(&self.dims, self.chunk_start);
        }
    }
}

/// Iterator over coordinates along a straight line, stepping by a fixed
/// vector until the edge of the board.
///
/// A zero vector yields the starting coordinate once rather than forever.
#[derive(Debug, Clone)]
pub struct Line {
    dims: Vec<Dim>,
    vector: Vec<isize>,
    next: Option<Coord>,
}

impl Line {
    pub(crate) fn new(dims: Vec<Dim>, start: Coord, vector: Vec<isize>) -> Self {
        Self {
            dims,
            vector,
            next: Some(start),
        }
    }
}

impl Iterator for Line {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let ret = self.next.take()?;
        if self.vector.iter().any(|&v| v != 0) {
            let stepped: Coord = ret.iter().zip(&self.vector).map(|(&c, &v)| c + v).collect();
            if coord_in_bounds(&stepped, &self.dims) {
                self.next = Some(stepped);
            }
        }
        Some(ret)
    }
}
