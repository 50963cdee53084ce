//! Computing the next generation.
//!
//! Each step builds a table from coordinates to [`Tile`]s covering the
//! living tiles and their frontier, counts living neighbors, applies the
//! rule, and throws the table away.

use crate::{
    cells::{Coord, Lattice, Tile},
    live_set::LiveSet,
    rules::Life,
};
use log::trace;
use std::collections::{HashMap, HashSet};

/// The per-step table. It is the only owner of the tiles' counters.
struct TileTable {
    tiles: HashMap<Coord, Tile>,
}

impl TileTable {
    fn with_capacity(capacity: usize) -> Self {
        TileTable {
            tiles: HashMap::with_capacity(capacity),
        }
    }

    /// The unique tile at `coord`, created if missing.
    #[inline]
    fn entry(&mut self, coord: Coord) -> &mut Tile {
        self.tiles.entry(coord).or_insert_with(|| Tile::new(coord))
    }

    fn mark_alive<'a>(&mut self, live: impl IntoIterator<Item = &'a Coord>) {
        for &coord in live {
            self.entry(coord).alive = true;
        }
    }

    fn count_neighbors<'a>(&mut self, lattice: Lattice, live: impl IntoIterator<Item = &'a Coord>) {
        for &coord in live {
            for nbr in lattice.neighbors(coord) {
                self.entry(nbr).neighbor_count += 1;
            }
        }
    }

    /// Tiles alive in the next generation.
    ///
    /// Tiles beyond [`Lattice::limit`] are never born.
    fn survivors(&self, lattice: Lattice, rule: &Life) -> HashSet<Coord> {
        self.tiles
            .values()
            .filter(|tile| rule.next_state(tile.alive, tile.neighbor_count))
            .filter(|tile| lattice.in_range(tile.coord))
            .map(|tile| tile.coord)
            .collect()
    }
}

/// The next generation of `live` under `rule`.
///
/// `live` is left untouched; the result is a new set on the same lattice.
pub fn step(live: &LiveSet, rule: &Life) -> LiveSet {
    let lattice = live.lattice();
    let mut table = TileTable::with_capacity(live.len() * 9);
    table.mark_alive(live);
    table.count_neighbors(lattice, live);
    trace!("{} live tiles, {} tiles in table", live.len(), table.tiles.len());
    LiveSet::from_raw(lattice, table.survivors(lattice, rule))
}

/// Same as [`step`], but counts neighbors on the rayon thread pool.
///
/// The living tiles are split into chunks. Each chunk counts into its own
/// table, and the tables are merged before the rule is applied, so every
/// count is exact.
#[cfg(feature = "parallel")]
pub fn step_parallel(live: &LiveSet, rule: &Life) -> LiveSet {
    use rayon::prelude::*;

    const CHUNK: usize = 4096;

    let lattice = live.lattice();
    let coords: Vec<Coord> = live.iter().copied().collect();
    let counts = coords
        .par_chunks(CHUNK)
        .map(|chunk| {
            let mut counts: HashMap<Coord, u8> = HashMap::with_capacity(chunk.len() * 9);
            for &coord in chunk {
                for nbr in lattice.neighbors(coord) {
                    *counts.entry(nbr).or_insert(0) += 1;
                }
            }
            counts
        })
        .reduce(HashMap::new, |mut acc, counts| {
            if acc.len() < counts.len() {
                return merge(counts, acc);
            }
            for (coord, n) in counts {
                *acc.entry(coord).or_insert(0) += n;
            }
            acc
        });

    let mut table = TileTable::with_capacity(counts.len() + coords.len());
    table.mark_alive(&coords);
    for (coord, n) in counts {
        table.entry(coord).neighbor_count = n;
    }
    trace!("{} live tiles, {} tiles in table", coords.len(), table.tiles.len());
    LiveSet::from_raw(lattice, table.survivors(lattice, rule))
}

#[cfg(feature = "parallel")]
fn merge(mut into: HashMap<Coord, u8>, from: HashMap<Coord, u8>) -> HashMap<Coord, u8> {
    for (coord, n) in from {
        *into.entry(coord).or_insert(0) += n;
    }
    into
}
