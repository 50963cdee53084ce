//! The world.

use crate::{
    cells::Coord,
    config::Config,
    error::Error,
    generation,
    live_set::{LiveSet, Viewport},
    rules::Life,
};
use log::debug;
use std::mem;

/// The world.
///
/// Owns the living tiles between two generations and replaces them
/// with the output of each step.
#[derive(Clone, Debug)]
pub struct World {
    /// World configuration.
    config: Config,

    /// The rule of the cellular automaton.
    rule: Life,

    /// The living tiles of the current generation.
    live: LiveSet,

    /// Number of steps taken since the world was created.
    generation: u64,
}

impl World {
    /// Creates a world at generation 0.
    pub fn new(config: Config, rule: Life, live: LiveSet) -> Self {
        World {
            config,
            rule,
            live,
            generation: 0,
        }
    }

    /// World configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The rule of the cellular automaton.
    pub const fn rule(&self) -> &Life {
        &self.rule
    }

    /// The living tiles of the current generation.
    pub const fn live(&self) -> &LiveSet {
        &self.live
    }

    /// The current generation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living tiles.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        #[cfg(feature = "parallel")]
        let next = generation::step_parallel(&self.live, &self.rule);
        #[cfg(not(feature = "parallel"))]
        let next = generation::step(&self.live, &self.rule);

        let prev = mem::replace(&mut self.live, next);
        self.generation += 1;
        debug!(
            "generation {}: {} -> {} living tiles",
            self.generation,
            prev.len(),
            self.live.len()
        );
    }

    /// Advances `n` generations.
    ///
    /// An empty world is not stepped; only the generation counter moves.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            if self.live.is_empty() {
                self.generation += 1;
                continue;
            }
            self.step();
        }
    }

    /// Makes the tile at `coord` alive.
    pub fn place(&mut self, coord: Coord) -> Result<bool, Error> {
        self.live.place(coord)
    }

    /// Makes the tile containing a continuous point alive.
    pub fn place_point(&mut self, x: f64, y: f64) -> Result<(Coord, bool), Error> {
        self.live.place_point(x, y)
    }

    /// Kills the tile at `coord`.
    pub fn remove(&mut self, coord: Coord) -> Result<bool, Error> {
        self.live.remove(coord)
    }

    /// Flips the tile at `coord`.
    pub fn toggle(&mut self, coord: Coord) -> Result<bool, Error> {
        self.live.toggle(coord)
    }

    /// All living tiles, sorted.
    pub fn snapshot(&self) -> Vec<Coord> {
        self.live.snapshot()
    }

    /// The living tiles inside `viewport`, sorted.
    pub fn snapshot_within(&self, viewport: &Viewport) -> Vec<Coord> {
        self.live.snapshot_within(viewport)
    }

    /// Displays the current generation in plaintext.
    pub fn display(&self) -> String {
        self.live.display()
    }
}
