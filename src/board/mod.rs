//! The n-dimensional sparse board.
//!
//! A board is a set of axes (finite or infinite) over a sparse mapping from
//! coordinates to values. The mapping lives behind a shared handle: slicing a
//! board produces another board with the same storage, a narrower set of
//! axes, and an offset translating its local coordinates into the shared
//! *global* coordinate space. Writes through any view are visible through
//! every other view of the same storage.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use itertools::Itertools;
use parking_lot::RwLock;

mod iter;

use crate::coord::{fmt_coord, Coord};
use crate::dim::{coord_in_bounds, Dim, Size};
use crate::error::{BoardError, BoardResult};
use crate::span::Span;
pub use iter::{CoordRange, Coords, Line};

type SharedMap<T> = Arc<RwLock<HashMap<Coord, T>>>;

/// An n-dimensional sparse board holding values of type `T`.
///
/// Boards are created with [`new`] from a list of axis sizes, any of which
/// may be [`Size::Infinite`]. Coordinates are validated against the board's
/// dimensionality and bounds on every access; negative components count back
/// from the end of a finite axis.
///
/// [`new`]: #method.new
/// [`Size::Infinite`]: ../dim/enum.Size.html
#[derive(Debug)]
pub struct Board<T> {
    dims: Vec<Dim>,
    data: SharedMap<T>,
    offset: Vec<isize>,
}

/// Cloning a board produces another *view* of the same storage (like taking
/// a whole-board slice), not a snapshot. Use [`copy`] for a snapshot.
///
/// [`copy`]: #method.copy
impl<T> Clone for Board<T> {
    fn clone(&self) -> Self {
        Self {
            dims: self.dims.clone(),
            data: Arc::clone(&self.data),
            offset: self.offset.clone(),
        }
    }
}

impl<T> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Board {}>", self.shape_string())
    }
}

/// Two boards are equal if they have equal axes and the same visible
/// coordinate/value pairs, whether or not they share storage.
impl<T: PartialEq> PartialEq for Board<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.dims != other.dims {
            return false;
        }
        fn visible<'a, T>(
            board: &Board<T>,
            map: &'a HashMap<Coord, T>,
        ) -> HashMap<Coord, &'a T> {
            map.iter()
                .filter_map(|(gcoord, value)| {
                    let lcoord = board.to_local(gcoord);
                    if board.in_bounds_unchecked(&lcoord) {
                        Some((lcoord, value))
                    } else {
                        None
                    }
                })
                .collect()
        }
        if Arc::ptr_eq(&self.data, &other.data) {
            // Same backing store; one lock acquisition is enough.
            let map = self.data.read();
            visible(self, &map) == visible(other, &map)
        } else {
            let a = self.data.read();
            let b = other.data.read();
            visible(self, &a) == visible(other, &b)
        }
    }
}
impl<T: Eq> Eq for Board<T> {}

impl<T> Board<T> {
    /// Creates a root board with the given axis sizes.
    ///
    /// Fails with `InvalidDimensions` if `sizes` is empty or any finite size
    /// is zero.
    pub fn new(sizes: &[Size]) -> BoardResult<Self> {
        if sizes.is_empty() {
            return Err(BoardError::InvalidDimensions {
                reason: "the board must have at least one dimension".to_owned(),
            });
        }
        let mut dims = Vec::with_capacity(sizes.len());
        for &size in sizes {
            match size {
                Size::Finite(0) => {
                    return Err(BoardError::InvalidDimensions {
                        reason: "each dimension must have size at least 1".to_owned(),
                    })
                }
                Size::Finite(n) => dims.push(Dim::Finite(n)),
                Size::Infinite => dims.push(Dim::Infinite),
            }
        }
        let offset = vec![0; sizes.len()];
        Ok(Self {
            dims,
            data: Arc::new(RwLock::new(HashMap::new())),
            offset,
        })
    }

    /// Internal constructor used by slicing. Axis sizes come from an
    /// already-valid parent, so zero-size axes are allowed here.
    fn with_storage(dims: Vec<Dim>, data: SharedMap<T>, offset: Vec<isize>) -> BoardResult<Self> {
        if dims.is_empty() {
            return Err(BoardError::InvalidDimensions {
                reason: "the board must have at least one dimension".to_owned(),
            });
        }
        Ok(Self { dims, data, offset })
    }

    /// Returns the board's axes.
    #[inline]
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// Returns the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Returns the offset translating this view's local coordinates into the
    /// shared global coordinate space. All zeros for a root board.
    #[inline]
    pub fn offset(&self) -> &[isize] {
        &self.offset
    }

    /// Returns `true` if this board is a view offset from the root storage.
    #[inline]
    pub fn is_offset(&self) -> bool {
        self.offset.iter().any(|&o| o != 0)
    }

    /// Returns `true` if at least one axis is finite.
    #[inline]
    pub fn has_finite_dims(&self) -> bool {
        self.dims.iter().any(|d| d.is_finite())
    }

    /// Returns `true` if at least one axis is infinite.
    #[inline]
    pub fn has_infinite_dims(&self) -> bool {
        self.dims.iter().any(|d| d.is_infinite())
    }

    /// Returns the total number of positions on the board: the product of
    /// the finite axis lengths, or `Infinite` if any axis is unbounded.
    pub fn len(&self) -> Size {
        let mut product: usize = 1;
        for dim in &self.dims {
            match dim.len() {
                Size::Finite(n) => product *= n,
                Size::Infinite => return Size::Infinite,
            }
        }
        Size::Finite(product)
    }

    /// Returns the number of positions visible to this view that hold data.
    pub fn data_len(&self) -> usize {
        let map = self.data.read();
        map.keys()
            .filter(|gcoord| self.in_bounds_unchecked(&self.to_local(gcoord)))
            .count()
    }

    /// Returns `true` if no position visible to this view holds data.
    pub fn is_empty(&self) -> bool {
        let map = self.data.read();
        !map.keys()
            .any(|gcoord| self.in_bounds_unchecked(&self.to_local(gcoord)))
    }

    // ------------------------------------------------------------------
    // Coordinate addressing
    // ------------------------------------------------------------------

    fn shape_string(&self) -> String {
        format!("({})", self.dims.iter().join(", "))
    }

    fn check_coord_arity(&self, coord: &[isize]) -> BoardResult<()> {
        if coord.len() != self.ndim() {
            Err(BoardError::arity(
                &format!("coordinate {}", fmt_coord(coord)),
                coord.len(),
                self.ndim(),
            ))
        } else {
            Ok(())
        }
    }

    fn out_of_bounds(&self, coord: &[isize]) -> BoardError {
        BoardError::OutOfBounds {
            coord: coord.to_vec(),
            shape: self.shape_string(),
        }
    }

    /// Containment check assuming the arity has already been validated.
    #[inline]
    fn in_bounds_unchecked(&self, coord: &[isize]) -> bool {
        coord_in_bounds(coord, &self.dims)
    }

    /// Returns `true` if the coordinate lies within this view's bounds.
    ///
    /// This is a pure bounds check; it says nothing about whether the
    /// position holds data. Note that a board whose axes are all infinite
    /// contains every non-negative coordinate.
    pub fn is_in_bounds(&self, coord: &[isize]) -> BoardResult<bool> {
        self.check_coord_arity(coord)?;
        Ok(self.in_bounds_unchecked(coord))
    }

    /// Alias for [`is_in_bounds`].
    ///
    /// [`is_in_bounds`]: #method.is_in_bounds
    #[inline]
    pub fn contains(&self, coord: &[isize]) -> BoardResult<bool> {
        self.is_in_bounds(coord)
    }

    /// Resolves negative indices against the local axes and bounds-checks
    /// the result, without the final translation to global space.
    fn normalize_local(&self, coord: &[isize]) -> BoardResult<Coord> {
        self.check_coord_arity(coord)?;
        let mut local = Vec::with_capacity(coord.len());
        for (&c, &dim) in coord.iter().zip(&self.dims) {
            local.push(dim.resolve_index(c)?);
        }
        if !self.in_bounds_unchecked(&local) {
            return Err(self.out_of_bounds(&local));
        }
        Ok(local)
    }

    /// Validates a coordinate and translates it into the shared global
    /// coordinate space.
    ///
    /// Negative components count back from the end of the corresponding
    /// finite axis (`NegativeIndexOnInfinite` on an unbounded one); the
    /// resolved coordinate must be in bounds (`OutOfBounds` otherwise).
    pub fn normalize(&self, coord: &[isize]) -> BoardResult<Coord> {
        let local = self.normalize_local(coord)?;
        Ok(self.to_global(&local))
    }

    /// Translates a global coordinate back into this view's local space.
    /// The inverse of the translation step of [`normalize`]; performs no
    /// bounds validation.
    ///
    /// [`normalize`]: #method.normalize
    #[inline]
    pub fn to_local(&self, gcoord: &[isize]) -> Coord {
        gcoord.iter().zip(&self.offset).map(|(&c, &o)| c - o).collect()
    }

    #[inline]
    fn to_global(&self, lcoord: &[isize]) -> Coord {
        lcoord.iter().zip(&self.offset).map(|(&c, &o)| c + o).collect()
    }

    // ------------------------------------------------------------------
    // Item access
    // ------------------------------------------------------------------

    /// Returns the value at a coordinate, or `None` if the position is in
    /// bounds but unoccupied.
    pub fn get(&self, coord: &[isize]) -> BoardResult<Option<T>>
    where
        T: Clone,
    {
        let gcoord = self.normalize(coord)?;
        Ok(self.data.read().get(&gcoord).cloned())
    }

    /// Stores a value at a coordinate, overwriting any existing value.
    pub fn set(&mut self, coord: &[isize], value: T) -> BoardResult<()> {
        let gcoord = self.normalize(coord)?;
        self.data.write().insert(gcoord, value);
        Ok(())
    }

    /// Removes the value at a coordinate. Deleting an unoccupied position is
    /// a no-op, not an error.
    pub fn delete(&mut self, coord: &[isize]) -> BoardResult<()> {
        let gcoord = self.normalize(coord)?;
        self.data.write().remove(&gcoord);
        Ok(())
    }

    /// Removes every value visible to this view. Data belonging to a parent
    /// or sibling view outside these bounds is untouched.
    pub fn clear(&mut self) {
        let mut map = self.data.write();
        map.retain(|gcoord, _| {
            let lcoord = self.to_local(gcoord);
            !self.in_bounds_unchecked(&lcoord)
        });
    }

    /// Returns a snapshot of this view as a new root board with fresh
    /// storage, optionally carrying the visible data across.
    pub fn copy(&self, with_data: bool) -> Self
    where
        T: Clone,
    {
        let board = Self {
            dims: self.dims.clone(),
            data: Arc::new(RwLock::new(HashMap::new())),
            offset: vec![0; self.ndim()],
        };
        if with_data {
            let mut map = board.data.write();
            for (coord, value) in self.iter_data() {
                map.insert(coord, value);
            }
        }
        board
    }

    // ------------------------------------------------------------------
    // Slicing
    // ------------------------------------------------------------------

    /// Returns a view of part of this board, linked to the same storage.
    ///
    /// `spans` supplies one range per axis (use [`spans!`] to build them
    /// from range literals). Offsets compose additively, so a slice of a
    /// slice addresses the same global coordinates the direct slice would.
    /// Strides other than ±1 are rejected with `UnsupportedStride`.
    ///
    /// [`spans!`]: ../macro.spans.html
    pub fn slice(&self, spans: &[Span]) -> BoardResult<Self> {
        if spans.len() != self.ndim() {
            return Err(BoardError::arity("slice", spans.len(), self.ndim()));
        }
        let mut dims = Vec::with_capacity(self.ndim());
        let mut offset = self.offset.clone();
        for (ax, (span, &dim)) in spans.iter().zip(&self.dims).enumerate() {
            let (start, new_dim) = span.resolve(dim)?;
            dims.push(new_dim);
            offset[ax] += start;
        }
        Self::with_storage(dims, Arc::clone(&self.data), offset)
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    /// Returns an iterator over every local coordinate in the board's
    /// declared extent.
    ///
    /// With only finite axes this is the full Cartesian product (row-major,
    /// last axis fastest) and terminates. With any infinite axis the
    /// sequence is chunked and never terminates on its own; see [`Coords`].
    ///
    /// [`Coords`]: struct.Coords.html
    pub fn iter_coords(&self) -> Coords {
        Coords::new(self.dims.clone())
    }

    /// Returns the `(coordinate, value)` pairs physically present in
    /// storage and visible within this view's bounds, in local coordinates.
    ///
    /// The result is finite even on an infinite board, bounded by how much
    /// data has been written. Order is unspecified.
    pub fn iter_data(&self) -> std::vec::IntoIter<(Coord, T)>
    where
        T: Clone,
    {
        let map = self.data.read();
        let items: Vec<(Coord, T)> = map
            .iter()
            .filter_map(|(gcoord, value)| {
                let lcoord = self.to_local(gcoord);
                if self.in_bounds_unchecked(&lcoord) {
                    Some((lcoord, value.clone()))
                } else {
                    None
                }
            })
            .collect();
        items.into_iter()
    }

    /// Returns an iterator over the axis-aligned box of coordinates between
    /// `coord1` and `coord2`, both inclusive.
    ///
    /// Both endpoints must themselves be in bounds (`OutOfBounds`
    /// otherwise). If any component of `coord2` is less than the matching
    /// component of `coord1` the box is empty.
    pub fn iter_coords_between(
        &self,
        coord1: &[isize],
        coord2: &[isize],
    ) -> BoardResult<CoordRange> {
        for coord in &[coord1, coord2] {
            self.check_coord_arity(coord)?;
            if !self.in_bounds_unchecked(coord) {
                return Err(self.out_of_bounds(coord));
            }
        }
        Ok(CoordRange::new(coord1.to_vec(), coord2.to_vec()))
    }

    /// Fills the board from an iterator of values, pairing them with
    /// [`iter_coords`] and stopping when either side runs out.
    ///
    /// On a board with an infinite axis this is bounded by the length of
    /// `values`.
    ///
    /// [`iter_coords`]: #method.iter_coords
    pub fn populate<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let coords = self.iter_coords();
        let mut map = self.data.write();
        for (lcoord, value) in coords.zip(values) {
            map.insert(self.to_global(&lcoord), value);
        }
    }

    /// Fills the axis-aligned box between two coordinates (inclusive) with
    /// copies of `value`, failing with `Overlap` if any target position
    /// already holds data. Nothing is written on failure.
    pub fn place(&mut self, coord1: &[isize], coord2: &[isize], value: T) -> BoardResult<()>
    where
        T: Clone,
    {
        let a = self.normalize_local(coord1)?;
        let b = self.normalize_local(coord2)?;
        let start: Coord = a.iter().zip(&b).map(|(&x, &y)| x.min(y)).collect();
        let end: Coord = a.iter().zip(&b).map(|(&x, &y)| x.max(y)).collect();
        let cells: Vec<Coord> = CoordRange::new(start, end).collect();
        {
            let map = self.data.read();
            for cell in &cells {
                if map.contains_key(&self.to_global(cell)) {
                    return Err(BoardError::Overlap { coord: cell.clone() });
                }
            }
        }
        let mut map = self.data.write();
        for cell in cells {
            let gcoord = self.to_global(&cell);
            map.insert(gcoord, value.clone());
        }
        Ok(())
    }

    /// Returns every straight run of `n` consecutive coordinates along each
    /// axis, together with the values stored there (`None` for unoccupied
    /// positions).
    ///
    /// Only defined on fully finite boards; an infinite axis has infinitely
    /// many runs.
    pub fn runs_of_n(&self, n: usize) -> BoardResult<Vec<(Vec<Coord>, Vec<Option<T>>)>>
    where
        T: Clone,
    {
        if self.has_infinite_dims() {
            return Err(BoardError::InvalidDimensions {
                reason: "cannot enumerate runs on a board with an infinite dimension".to_owned(),
            });
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        let sizes: Vec<isize> = self
            .dims
            .iter()
            .map(|d| d.len().to_usize().unwrap_or(0) as isize)
            .collect();
        let map = self.data.read();
        let mut runs = Vec::new();
        for ax in 0..self.ndim() {
            if sizes[ax] < n as isize {
                continue;
            }
            let start = vec![0; self.ndim()];
            let end: Coord = sizes
                .iter()
                .enumerate()
                .map(|(i, &s)| if i == ax { s - n as isize } else { s - 1 })
                .collect();
            for anchor in CoordRange::new(start, end) {
                let coords: Vec<Coord> = (0..n as isize)
                    .map(|k| {
                        let mut c = anchor.clone();
                        c[ax] += k;
                        c
                    })
                    .collect();
                let values = coords
                    .iter()
                    .map(|c| map.get(&self.to_global(c)).cloned())
                    .collect();
                runs.push((coords, values));
            }
        }
        Ok(runs)
    }

    // ------------------------------------------------------------------
    // Neighbour and region queries
    // ------------------------------------------------------------------

    /// Returns the neighbours of a coordinate within `radius`, clipped at
    /// the board edges.
    ///
    /// With `include_diagonals` this is the Chebyshev ball of the given
    /// radius minus the coordinate itself (up to `(2r + 1)^N - 1`
    /// neighbours when unclipped). Without, only pure single-axis steps of
    /// up to `radius` count, matching movement rules that forbid diagonals.
    pub fn neighbours(
        &self,
        coord: &[isize],
        radius: usize,
        include_diagonals: bool,
    ) -> BoardResult<Vec<Coord>> {
        let local = self.normalize_local(coord)?;
        let r = radius as isize;
        if include_diagonals {
            let start: Coord = local.iter().map(|&c| (c - r).max(0)).collect();
            let end: Coord = local
                .iter()
                .zip(&self.dims)
                .map(|(&c, &dim)| match dim {
                    Dim::Finite(size) => (c + r).min(size as isize - 1),
                    Dim::Infinite => c + r,
                })
                .collect();
            Ok(CoordRange::new(start, end)
                .filter(|c| *c != local)
                .collect())
        } else {
            let mut out = Vec::new();
            for ax in 0..self.ndim() {
                for step in 1..=r {
                    for &sign in &[-1, 1] {
                        let mut c = local.clone();
                        c[ax] += sign * step;
                        if self.in_bounds_unchecked(&c) {
                            out.push(c);
                        }
                    }
                }
            }
            Ok(out)
        }
    }

    /// Returns `true` if the coordinate lies on any edge of the board: a
    /// component at 0, or at `size - 1` on a finite axis. Infinite axes only
    /// have a lower edge.
    pub fn is_edge(&self, coord: &[isize]) -> BoardResult<bool> {
        self.check_coord_arity(coord)?;
        if !self.in_bounds_unchecked(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(coord.iter().zip(&self.dims).any(|(&c, &dim)| {
            c == 0 || matches!(dim, Dim::Finite(size) if c == size as isize - 1)
        }))
    }

    /// Returns the bounding box `(min, max)` of the coordinates visible to
    /// this view that hold data, or `None` if the view is empty.
    pub fn occupied(&self) -> Option<(Coord, Coord)> {
        let map = self.data.read();
        let mut bounds: Option<(Coord, Coord)> = None;
        for gcoord in map.keys() {
            let lcoord = self.to_local(gcoord);
            if !self.in_bounds_unchecked(&lcoord) {
                continue;
            }
            match &mut bounds {
                None => bounds = Some((lcoord.clone(), lcoord)),
                Some((min, max)) => {
                    for (ax, &c) in lcoord.iter().enumerate() {
                        min[ax] = min[ax].min(c);
                        max[ax] = max[ax].max(c);
                    }
                }
            }
        }
        bounds
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Returns an iterator over the coordinates starting at `coord` and
    /// stepping by `vector` until the edge of the board.
    ///
    /// The vector may take strides, e.g. `(1, 2)`. A zero vector yields the
    /// starting coordinate once.
    pub fn iter_line(&self, coord: &[isize], vector: &[isize]) -> BoardResult<Line> {
        self.check_coord_arity(coord)?;
        if !self.in_bounds_unchecked(coord) {
            return Err(self.out_of_bounds(coord));
        }
        if vector.len() != self.ndim() {
            return Err(BoardError::arity("vector", vector.len(), self.ndim()));
        }
        Ok(Line::new(self.dims.clone(), coord.to_vec(), vector.to_vec()))
    }

    /// Returns the coordinates along the straight line from `coord1` to
    /// `coord2`, rounding each step to the nearest integer coordinate.
    ///
    /// With `extend` the line is continued to the board edges in both
    /// directions. Stepping follows the axis with the largest displacement,
    /// so an axis-aligned line never divides by a zero delta; two equal
    /// endpoints yield that single coordinate.
    pub fn iter_line_between(
        &self,
        coord1: &[isize],
        coord2: &[isize],
        extend: bool,
    ) -> BoardResult<Vec<Coord>> {
        for coord in &[coord1, coord2] {
            self.check_coord_arity(coord)?;
            if !self.in_bounds_unchecked(coord) {
                return Err(self.out_of_bounds(coord));
            }
        }
        let deltas: Vec<isize> = coord1
            .iter()
            .zip(coord2)
            .map(|(&a, &b)| b - a)
            .collect();
        if deltas.iter().all(|&d| d == 0) {
            return Ok(vec![coord1.to_vec()]);
        }
        if extend
            && deltas
                .iter()
                .zip(&self.dims)
                .all(|(&d, dim)| d == 0 || dim.is_infinite())
        {
            // Forward extension along only infinite axes never reaches an
            // edge.
            return Err(BoardError::InvalidDimensions {
                reason: "cannot extend a line to the edge of an infinite dimension".to_owned(),
            });
        }
        let driving = (0..deltas.len())
            .max_by_key(|&ax| deltas[ax].abs())
            .unwrap_or(0);
        let steps = deltas[driving].abs();
        let point = |t: isize| -> Coord {
            coord1
                .iter()
                .zip(&deltas)
                .map(|(&a, &d)| a + ((t as f64 * d as f64) / steps as f64).round() as isize)
                .collect()
        };
        let mut out = Vec::new();
        if extend {
            let mut behind = Vec::new();
            let mut t = -1;
            loop {
                let p = point(t);
                if !self.in_bounds_unchecked(&p) {
                    break;
                }
                behind.push(p);
                t -= 1;
            }
            out.extend(behind.into_iter().rev());
        }
        for t in 0..=steps {
            out.push(point(t));
        }
        if extend {
            let mut t = steps + 1;
            loop {
                let p = point(t);
                if !self.in_bounds_unchecked(&p) {
                    break;
                }
                out.push(p);
                t += 1;
            }
        }
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Dumping
    // ------------------------------------------------------------------

    /// Returns a textual dump of the view: a header line, an opening brace,
    /// one line per occupied coordinate in sorted order (with the global
    /// coordinate when the view is offset), and a closing brace.
    ///
    /// For debugging and test assertions; not a stable format.
    pub fn dumped(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        let mut lines = Vec::new();
        if self.is_offset() {
            lines.push(format!("{} offset by {}", self, fmt_coord(&self.offset)));
        } else {
            lines.push(format!("{}", self));
        }
        lines.push("{".to_owned());
        let map = self.data.read();
        let items = map
            .iter()
            .filter_map(|(gcoord, value)| {
                let lcoord = self.to_local(gcoord);
                if self.in_bounds_unchecked(&lcoord) {
                    Some((lcoord, value))
                } else {
                    None
                }
            })
            .sorted_by(|a, b| a.0.cmp(&b.0));
        for (lcoord, value) in items {
            let gcoord = if self.is_offset() {
                format!(" => {}", fmt_coord(&self.to_global(&lcoord)))
            } else {
                String::new()
            };
            lines.push(format!("  {}{} [{}]", fmt_coord(&lcoord), gcoord, value));
        }
        lines.push("}".to_owned());
        lines
    }

    /// Writes [`dumped`] to `out`, one line at a time.
    ///
    /// [`dumped`]: #method.dumped
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for line in self.dumped() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
