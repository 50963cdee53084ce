//! All kinds of errors in this crate.

use crate::cells::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Coordinate {0} is not aligned to a lattice of size {1}.
    Unaligned(Coord, i64),
    /// Coordinate {0} is outside the range of the lattice.
    OutOfRange(Coord),
    /// Tile at column {0}, row {1} is outside the range of the lattice.
    TileOutOfRange(i64, i64),
    /// Point is not finite or lies outside the range of the lattice.
    PointOutOfRange,
    /// Tile size should be positive.
    NonPositiveSize,
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules are not supported on an unbounded lattice.
    B0Error,
    /// Unknown pattern: {0:?}.
    UnknownPattern(String),
    /// Density should be between 0 and 1.
    DensityError,
    /// Live sets on different lattices cannot be combined.
    LatticeMismatch,
}
