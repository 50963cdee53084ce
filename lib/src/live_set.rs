//! The set of living tiles.

use crate::{
    cells::{Coord, Lattice},
    error::Error,
    generation,
    rules::Life,
};
use std::{
    collections::{hash_set, HashSet},
    fmt::Write,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest width or height, in tiles, that [`LiveSet::display`] draws
/// as a grid.
pub const MAX_DISPLAY_TILES: i64 = 1024;

/// A rectangular region of the lattice, in the same units as [`Coord`].
///
/// Only used when presenting a live set. The simulation itself never
/// looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    /// The x-coordinate of the lower left corner.
    pub x: i64,
    /// The y-coordinate of the lower left corner.
    pub y: i64,
    /// Width.
    pub width: i64,
    /// Height.
    pub height: i64,
}

impl Viewport {
    /// Whether the tile anchored at `coord` starts inside the region.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        (self.x..self.x.saturating_add(self.width)).contains(&coord.x)
            && (self.y..self.y.saturating_add(self.height)).contains(&coord.y)
    }
}

/// The coordinates of all living tiles.
///
/// This is the whole state of the automaton between two generations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    lattice: Lattice,
    cells: HashSet<Coord>,
}

impl LiveSet {
    /// An empty set on the given lattice.
    pub fn new(lattice: Lattice) -> Self {
        LiveSet {
            lattice,
            cells: HashSet::new(),
        }
    }

    /// Collects already aligned coordinates into a live set.
    ///
    /// Fails on the first coordinate that is not aligned.
    pub fn from_coords<I>(lattice: Lattice, coords: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = LiveSet::new(lattice);
        for coord in coords {
            set.place(coord)?;
        }
        Ok(set)
    }

    /// Wraps a set of coordinates produced by the engine.
    ///
    /// All coordinates must already be aligned and in range.
    pub(crate) fn from_raw(lattice: Lattice, cells: HashSet<Coord>) -> Self {
        debug_assert!(cells.iter().all(|&c| lattice.check(c).is_ok()));
        LiveSet { lattice, cells }
    }

    /// The lattice the tiles live on.
    #[inline]
    pub const fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Number of living tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there is no living tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the tile at `coord` is alive.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Makes the tile at `coord` alive.
    ///
    /// Placing a tile that is already alive changes nothing.
    /// Returns whether the set changed.
    pub fn place(&mut self, coord: Coord) -> Result<bool, Error> {
        let coord = self.lattice.check(coord)?;
        Ok(self.cells.insert(coord))
    }

    /// Inserts a coordinate known to be aligned and in range.
    #[inline]
    pub(crate) fn insert_aligned(&mut self, coord: Coord) -> bool {
        debug_assert!(self.lattice.check(coord).is_ok());
        self.cells.insert(coord)
    }

    /// Makes the tile containing a continuous point alive.
    ///
    /// The point is snapped to the lattice first. Fails only if the point
    /// is not finite or is out of range.
    /// Returns the tile and whether the set changed.
    pub fn place_point(&mut self, x: f64, y: f64) -> Result<(Coord, bool), Error> {
        let coord = self.lattice.snap(x, y)?;
        Ok((coord, self.cells.insert(coord)))
    }

    /// Kills the tile at `coord`.
    ///
    /// Returns whether the set changed.
    pub fn remove(&mut self, coord: Coord) -> Result<bool, Error> {
        let coord = self.lattice.check(coord)?;
        Ok(self.cells.remove(&coord))
    }

    /// Flips the tile at `coord`.
    ///
    /// Returns whether the tile is alive afterwards.
    pub fn toggle(&mut self, coord: Coord) -> Result<bool, Error> {
        let coord = self.lattice.check(coord)?;
        if self.cells.remove(&coord) {
            Ok(false)
        } else {
            self.cells.insert(coord);
            Ok(true)
        }
    }

    /// Adds all tiles of `other` to this set.
    pub fn extend_from(&mut self, other: &LiveSet) -> Result<(), Error> {
        if self.lattice != other.lattice {
            return Err(Error::LatticeMismatch);
        }
        self.cells.extend(other.cells.iter().copied());
        Ok(())
    }

    /// Kills every tile.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterates over the living tiles in no particular order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// All living tiles, sorted by `(x, y)`.
    pub fn snapshot(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.cells.iter().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// The living tiles inside `viewport`, sorted by `(x, y)`.
    pub fn snapshot_within(&self, viewport: &Viewport) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self
            .cells
            .iter()
            .copied()
            .filter(|&c| viewport.contains(c))
            .collect();
        coords.sort_unstable();
        coords
    }

    /// The smallest region containing every living tile.
    ///
    /// Returns `None` for an empty set, or if the extent does not fit in
    /// an `i64`.
    pub fn bounding_box(&self) -> Option<Viewport> {
        let size = self.lattice.size();
        let mut iter = self.cells.iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for c in iter {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        Some(Viewport {
            x: min_x,
            y: min_y,
            width: max_x.checked_sub(min_x)?.checked_add(size)?,
            height: max_y.checked_sub(min_y)?.checked_add(size)?,
        })
    }

    /// The next generation under Conway's rule.
    pub fn next(&self) -> LiveSet {
        generation::step(self, &Life::default())
    }

    /// Displays the bounding box in plaintext.
    ///
    /// * Dead tiles are represented by `.`;
    /// * Living tiles are represented by `o`;
    /// * The top row is the largest `y`.
    ///
    /// If the bounding box is wider or taller than [`MAX_DISPLAY_TILES`],
    /// the living tiles are listed as `column row` lines instead.
    pub fn display(&self) -> String {
        let mut str = String::new();
        let size = self.lattice.size();
        let bbox = self.bounding_box().filter(|bbox| {
            bbox.width / size <= MAX_DISPLAY_TILES && bbox.height / size <= MAX_DISPLAY_TILES
        });
        if let Some(bbox) = bbox {
            writeln!(str, "#P {} {}", bbox.x / size, bbox.y / size).ok();
            let mut y = bbox.y + bbox.height - size;
            while y >= bbox.y {
                let mut x = bbox.x;
                while x < bbox.x + bbox.width {
                    str.push(if self.contains(Coord::new(x, y)) { 'o' } else { '.' });
                    x += size;
                }
                str.push('\n');
                y -= size;
            }
        } else if !self.is_empty() {
            writeln!(str, "#C {} living tiles, too sparse to draw", self.len()).ok();
            for coord in self.snapshot() {
                writeln!(str, "{} {}", coord.x / size, coord.y / size).ok();
            }
        }
        str
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
