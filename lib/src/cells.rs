//! Cells on the lattice.

use crate::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a tile.
///
/// This is the anchor corner of the tile, so both coordinates are
/// multiples of the [`Lattice`] size. Two coordinates are the same tile
/// if and only if they are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// The x-coordinate.
    pub x: i64,
    /// The y-coordinate.
    pub y: i64,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Coord { x, y }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The directions of the eight neighbors.
///
/// The neighbor in direction `(dx, dy)` is at `(x - dx * size, y - dy * size)`.
const DIRECTIONS: [(i64, i64); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// The infinite lattice of tiles.
///
/// Every tile is a square with edge length `size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lattice {
    size: i64,
}

impl Default for Lattice {
    fn default() -> Self {
        Lattice { size: 16 }
    }
}

impl Lattice {
    /// Creates a lattice with the given edge length.
    ///
    /// Returns [`Error::NonPositiveSize`] if `size` is not positive.
    pub fn new(size: i64) -> Result<Self, Error> {
        if size > 0 {
            Ok(Lattice { size })
        } else {
            Err(Error::NonPositiveSize)
        }
    }

    /// Edge length of a tile.
    #[inline]
    pub const fn size(self) -> i64 {
        self.size
    }

    /// Largest absolute value of a tile coordinate.
    ///
    /// A quarter of `i64::MAX`, rounded down to a multiple of `size`, so
    /// that neighbors and extents of tiles in range never overflow.
    #[inline]
    pub const fn limit(self) -> i64 {
        i64::MAX / 4 / self.size * self.size
    }

    /// Whether both coordinates lie within [`Lattice::limit`].
    #[inline]
    pub fn in_range(self, coord: Coord) -> bool {
        let limit = self.limit();
        (-limit..=limit).contains(&coord.x) && (-limit..=limit).contains(&coord.y)
    }

    /// Rounds a continuous value down to the nearest lattice line.
    ///
    /// `round(v) = floor(v / size) * size`.
    ///
    /// Returns `None` if `v` is not finite or the result is out of range.
    #[inline]
    pub fn round(self, v: f64) -> Option<i64> {
        let index = (v / self.size as f64).floor();
        let max = (self.limit() / self.size) as f64;
        if index.is_finite() && (-max..=max).contains(&index) {
            Some(index as i64 * self.size)
        } else {
            None
        }
    }

    /// The tile containing a continuous point, e.g., a pointer position.
    #[inline]
    pub fn snap(self, x: f64, y: f64) -> Result<Coord, Error> {
        match (self.round(x), self.round(y)) {
            (Some(x), Some(y)) => Ok(Coord::new(x, y)),
            _ => Err(Error::PointOutOfRange),
        }
    }

    /// Whether the coordinate is the anchor of a tile.
    #[inline]
    pub fn is_aligned(self, coord: Coord) -> bool {
        coord.x.rem_euclid(self.size) == 0 && coord.y.rem_euclid(self.size) == 0
    }

    /// Checks that the coordinate is the anchor of a tile in range.
    pub fn check(self, coord: Coord) -> Result<Coord, Error> {
        if !self.is_aligned(coord) {
            Err(Error::Unaligned(coord, self.size))
        } else if !self.in_range(coord) {
            Err(Error::OutOfRange(coord))
        } else {
            Ok(coord)
        }
    }

    /// The anchor of the tile at the given column and row.
    pub fn tile_at(self, col: i64, row: i64) -> Result<Coord, Error> {
        match (col.checked_mul(self.size), row.checked_mul(self.size)) {
            (Some(x), Some(y)) => self.check(Coord::new(x, y)),
            _ => Err(Error::TileOutOfRange(col, row)),
        }
    }

    /// The eight tiles in the Moore neighborhood of `coord`.
    ///
    /// The order is fixed. The lattice has no boundary, so all eight
    /// neighbors are always returned. `coord` must be in range.
    #[inline]
    pub fn neighbors(self, coord: Coord) -> [Coord; 8] {
        DIRECTIONS.map(|(dx, dy)| Coord::new(coord.x - dx * self.size, coord.y - dy * self.size))
    }
}

/// A tile during the computation of one generation.
///
/// Only the coordinate outlives the step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// The coordinates of the tile.
    pub coord: Coord,

    /// Number of living neighbors seen so far.
    pub neighbor_count: u8,

    /// Whether the tile was alive when the step began.
    pub alive: bool,
}

impl Tile {
    /// A dead tile with no living neighbors counted yet.
    #[inline]
    pub const fn new(coord: Coord) -> Self {
        Tile {
            coord,
            neighbor_count: 0,
            alive: false,
        }
    }

    /// The eight neighbors of this tile.
    #[inline]
    pub fn neighbors(&self, lattice: Lattice) -> [Coord; 8] {
        lattice.neighbors(self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_floors_negative_values() {
        let lattice = Lattice::default();
        assert_eq!(lattice.round(0.0), Some(0));
        assert_eq!(lattice.round(15.9), Some(0));
        assert_eq!(lattice.round(16.0), Some(16));
        assert_eq!(lattice.round(-0.5), Some(-16));
        assert_eq!(lattice.round(-16.0), Some(-16));
        assert_eq!(lattice.snap(33.2, -1.0), Ok(Coord::new(32, -16)));
    }

    #[test]
    fn round_rejects_huge_and_nan() {
        let lattice = Lattice::default();
        assert_eq!(lattice.round(1e20), None);
        assert_eq!(lattice.round(-1e300), None);
        assert_eq!(lattice.round(f64::NAN), None);
        assert_eq!(lattice.round(f64::INFINITY), None);
        assert_eq!(lattice.snap(1e20, 0.0), Err(Error::PointOutOfRange));
        assert_eq!(lattice.round(lattice.limit() as f64 / 2.0).map(|v| v % 16), Some(0));
    }

    #[test]
    fn range() {
        let lattice = Lattice::new(16).unwrap();
        let limit = lattice.limit();
        assert_eq!(limit % 16, 0);
        assert!(lattice.in_range(Coord::new(limit, -limit)));
        let far = Coord::new(limit + 16, 0);
        assert_eq!(lattice.check(far), Err(Error::OutOfRange(far)));
        let edge = Coord::new(i64::MIN, 0);
        assert_eq!(lattice.check(edge), Err(Error::OutOfRange(edge)));
        assert_eq!(lattice.tile_at(-2, 3), Ok(Coord::new(-32, 48)));
        assert_eq!(lattice.tile_at(i64::MAX, 0), Err(Error::TileOutOfRange(i64::MAX, 0)));
        assert_eq!(
            lattice.tile_at(limit / 16 + 1, 0),
            Err(Error::OutOfRange(Coord::new(limit + 16, 0)))
        );
        for n in lattice.neighbors(Coord::new(limit, -limit)) {
            assert!(n.x.abs() <= limit + 16 && n.y.abs() <= limit + 16);
        }
    }

    #[test]
    fn alignment() {
        let lattice = Lattice::new(16).unwrap();
        assert!(lattice.is_aligned(Coord::new(-32, 48)));
        assert!(!lattice.is_aligned(Coord::new(-31, 48)));
        assert_eq!(
            lattice.check(Coord::new(8, 0)),
            Err(Error::Unaligned(Coord::new(8, 0), 16))
        );
        assert_eq!(Lattice::new(0), Err(Error::NonPositiveSize));
    }

    #[test]
    fn eight_distinct_neighbors() {
        let lattice = Lattice::new(4).unwrap();
        let origin = Coord::new(8, -4);
        let nbhd = Tile::new(origin).neighbors(lattice);
        for (i, a) in nbhd.iter().enumerate() {
            assert_ne!(*a, origin);
            assert!(lattice.is_aligned(*a));
            assert!((a.x - origin.x).abs() <= 4 && (a.y - origin.y).abs() <= 4);
            assert!(nbhd[i + 1..].iter().all(|b| a != b));
        }
        assert_eq!(nbhd, lattice.neighbors(origin));
    }
}
