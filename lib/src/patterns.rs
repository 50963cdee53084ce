//! Some well-known patterns.

use crate::{error::Error, live_set::LiveSet};

/// A named pattern.
///
/// `cells` are `(column, row)` pairs in tile units, with rows growing
/// upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The usual name, matched loosely by [`Pattern::find`].
    pub name: &'static str,

    /// Living tiles as `(column, row)`, relative to the `(0, 0)` tile.
    pub cells: &'static [(i64, i64)],
}

/// All built-in patterns.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beehive",
        cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (3, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 2), (0, 3), (1, 2), (1, 3), (2, 0), (2, 1), (3, 0), (3, 1)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 1), (0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "LWSS",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 3), (1, 3),
            (10, 4), (10, 3), (10, 2), (11, 5), (11, 1), (12, 6), (12, 0),
            (13, 6), (13, 0), (14, 3), (15, 5), (15, 1), (16, 4), (16, 3),
            (16, 2), (17, 3),
            (20, 6), (20, 5), (20, 4), (21, 6), (21, 5), (21, 4),
            (22, 7), (22, 3), (24, 8), (24, 7), (24, 3), (24, 2),
            (34, 6), (34, 5), (35, 6), (35, 5),
        ],
    },
];

/// Lowercases and drops separators, so that `"R-pentomino"`,
/// `"r_pentomino"` and `"R Pentomino"` are the same name.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Pattern {
    /// Finds a pattern by name.
    pub fn find(name: &str) -> Result<&'static Pattern, Error> {
        let key = normalize(name);
        PATTERNS
            .iter()
            .find(|p| normalize(p.name) == key)
            .ok_or_else(|| Error::UnknownPattern(name.to_owned()))
    }

    /// Number of living tiles.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Places the pattern with its `(0, 0)` tile at column `col` and row `row`.
    ///
    /// Fails without placing anything if a tile would be out of range.
    pub fn place_into(&self, live: &mut LiveSet, col: i64, row: i64) -> Result<(), Error> {
        let lattice = live.lattice();
        let coords = self
            .cells
            .iter()
            .map(|&(c, r)| lattice.tile_at(col.saturating_add(c), row.saturating_add(r)))
            .collect::<Result<Vec<_>, _>>()?;
        for coord in coords {
            live.insert_aligned(coord);
        }
        Ok(())
    }
}
